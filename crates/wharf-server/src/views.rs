//! HTML pages for browser visitors.
//!
//! Plain string templating with a minimal inline stylesheet; everything
//! interpolated from user data goes through [`safe`].

use wharf_types::{Document, WorkspaceAddress};

use crate::config::PubConfig;

/// Placeholder address shown in usage docs; never a real workspace.
const SAMPLE_WORKSPACE: &str = "+your.workspace";

/// Escape HTML-significant characters.
pub fn safe(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = "\
    html { font-family: sans-serif; font-size: 16px; color: #222; padding: 10px; }\n\
    code { background: #eee; padding: 4px 7px; margin: 2px; border-radius: 3px;\n\
           border: 1px solid #888; display: inline-block; word-break: break-all; }\n\
    pre { background: #eee; padding: 4px 7px; margin: 2px; border-radius: 3px;\n\
          border: 1px solid #888; word-break: break-all; white-space: pre-wrap; }\n\
    .indent { margin-left: 50px; }\n\
    .infoBox { display: inline-block; padding: 0 16px; background: #e2e2e2;\n\
               border: 2px solid #bbb; border-radius: 16px; }\n";

fn wrap_page(page: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n\
         <title>Wharf Pub</title>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <style>\n{STYLE}</style>\n\
         </head>\n<body>\n{page}\n</body>\n</html>\n"
    )
}

fn about_badge(config: &PubConfig) -> String {
    let title = config
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| format!("<h2>{}</h2>", safe(t)))
        .unwrap_or_default();
    let notes = config
        .notes
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(|n| format!("<p>{}</p>", safe(n)))
        .unwrap_or_default();
    if title.is_empty() && notes.is_empty() {
        return String::new();
    }
    format!("<div class=\"infoBox\">{title}{notes}</div>")
}

fn api_docs(workspace: &str) -> String {
    let ws = safe(workspace);
    format!(
        "<h2>HTTP API</h2>\n\
         <p>Replace <code>:workspace</code> with your workspace address, \
         including its leading plus character.</p>\n\
         <ul>\n\
         <li>GET <a href=\"/api/v1/{ws}/paths\"><code>/api/v1/:workspace/paths</code></a> \
         - list all paths</li>\n\
         <li>GET <a href=\"/api/v1/{ws}/documents\"><code>/api/v1/:workspace/documents</code></a> \
         - list all documents (including history)</li>\n\
         <li>POST <code>/api/v1/:workspace/documents</code> \
         - upload documents (supply as a JSON array)</li>\n\
         </ul>"
    )
}

/// The homepage: a workspace list when discoverable, otherwise a count
/// and instructions for crafting a workspace URL by hand.
pub fn home_page(workspaces: &[WorkspaceAddress], config: &PubConfig) -> String {
    let workspace_section = if config.discoverable_workspaces {
        let items = if workspaces.is_empty() {
            "<li><i>No workspaces yet. Create one by syncing with this pub, or</i>\n\
             <form action=\"/demo/recreate\" method=\"post\">\n\
             <input type=\"submit\" value=\"Create the demo workspace\" />\n\
             </form></li>"
                .to_string()
        } else {
            workspaces
                .iter()
                .map(|ws| {
                    let ws = safe(ws.as_str());
                    format!("<li>📂 <a href=\"/workspace/{ws}\"><code>{ws}</code></a></li>")
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        format!(
            "<p>This is a pub server hosting the following workspaces:</p>\n<ul>\n{items}\n</ul>"
        )
    } else {
        format!(
            "<p>This is a pub server hosting <b>{}</b> unlisted workspaces.</p>\n\
             <p>If you know the workspace address, you can manually craft an URL to visit it:</p>\n\
             <p><code><a href=\"/workspace/{sample}\">/workspace/{sample}</a></code></p>",
            workspaces.len(),
            sample = safe(SAMPLE_WORKSPACE),
        )
    };

    wrap_page(&format!(
        "{badge}\n<h1>🗃 Wharf Pub</h1>\n{workspace_section}\n<hr/>\n{api}",
        badge = about_badge(config),
        api = api_docs(SAMPLE_WORKSPACE),
    ))
}

/// Detail view of one workspace: delete form, then each current path with
/// its content and collapsible history.
pub fn workspace_page(
    workspace: &WorkspaceAddress,
    sections: &[(Document, Vec<Document>)],
) -> String {
    let ws = safe(workspace.as_str());
    let mut doc_sections = Vec::with_capacity(sections.len());
    for (doc, history) in sections {
        let history_entries = history
            .iter()
            .map(|entry| {
                let pretty = serde_json::to_string_pretty(entry)
                    .unwrap_or_else(|_| "(unrenderable document)".into());
                format!("<pre>{}</pre>", safe(&pretty))
            })
            .collect::<Vec<_>>()
            .join("\n");
        doc_sections.push(format!(
            "<div>📄 <code>{path}</code></div>\n\
             <div><pre class=\"indent\">{content}</pre></div>\n\
             <details class=\"indent\"><summary>...</summary>\n{history_entries}\n</details>\n\
             <div>&nbsp;</div>",
            path = safe(&doc.path),
            content = safe(&doc.content),
        ));
    }

    wrap_page(&format!(
        "<p><a href=\"/\">&larr; Home</a></p>\n\
         <h2>📂 Workspace: <code>{ws}</code></h2>\n\
         <form action=\"/api/v1/{ws}/delete\" method=\"post\">\n\
         <input type=\"submit\" value=\"Delete this workspace\" /> \
         (It will come back if clients sync it again.)\n\
         </form>\n<hr/>\n<h2>Paths and contents</h2>\n{}",
        doc_sections.join("\n"),
    ))
}
