//! HTML page rendering. Plain string assembly; every user-supplied value
//! goes through [`escape`] before interpolation.

use crate::dto::NoteView;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\
         </body>\n\
         </html>\n",
        escape(title),
        body
    )
}

pub fn list_page(notes: &[NoteView]) -> String {
    let mut body = String::from("<h1>Notes</h1>\n");

    if notes.is_empty() {
        body.push_str("<p>No notes yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for note in notes {
            let title = if note.title.is_empty() {
                "(untitled)".to_string()
            } else {
                escape(&note.title)
            };
            body.push_str(&format!(
                "<li><a href=\"/view/{id}\">{title}</a> <small>{date}</small> \
                 <a href=\"/edit?id={id}\">edit</a> \
                 <a href=\"/delete?id={id}\">delete</a></li>\n",
                id = note.id,
                date = escape(&note.date),
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/add\">Add note</a></p>\n");

    layout("Notes", &body)
}

pub fn add_page() -> String {
    let body = "<h1>Add note</h1>\n\
                <form method=\"post\" action=\"/add\">\n\
                <p><input type=\"text\" name=\"title\" placeholder=\"Title\"></p>\n\
                <p><textarea name=\"body\" rows=\"10\" cols=\"60\"></textarea></p>\n\
                <p><button type=\"submit\">Save</button></p>\n\
                </form>\n\
                <p><a href=\"/list\">Back to list</a></p>\n";

    layout("Add note", body)
}

pub fn edit_page(note: &NoteView) -> String {
    let body = format!(
        "<h1>Edit note</h1>\n\
         <form method=\"post\" action=\"/edit\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <p><input type=\"text\" name=\"title\" value=\"{title}\"></p>\n\
         <p><textarea name=\"body\" rows=\"10\" cols=\"60\">{content}</textarea></p>\n\
         <p><button type=\"submit\">Save</button></p>\n\
         </form>\n\
         <p><a href=\"/list\">Back to list</a></p>\n",
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.body),
    );

    layout("Edit note", &body)
}

pub fn view_page(note: &NoteView) -> String {
    let title = if note.title.is_empty() {
        "(untitled)".to_string()
    } else {
        escape(&note.title)
    };
    let body = format!(
        "<h1>{title}</h1>\n\
         <p><small>{date}</small></p>\n\
         <p>{content}</p>\n\
         <p><a href=\"/edit?id={id}\">edit</a> \
         <a href=\"/delete?id={id}\">delete</a> \
         <a href=\"/list\">Back to list</a></p>\n",
        id = note.id,
        date = escape(&note.date),
        content = escape(&note.body),
    );

    layout(&note.title, &body)
}

pub fn error_page(status: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n\
         <p>{}</p>\n\
         <p><a href=\"/list\">Back to list</a></p>\n",
        escape(status),
        escape(message),
    );

    layout(status, &body)
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
