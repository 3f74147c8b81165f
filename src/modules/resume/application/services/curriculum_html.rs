use chrono::{Datelike, NaiveDate};

use crate::modules::resume::application::domain::entities::{
    CurriculumData, CvFormat, CvSection,
};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn month_year(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

fn span_label(start: NaiveDate, end: Option<NaiveDate>, is_current: bool) -> String {
    let until = if is_current || end.is_none() {
        "Present".to_string()
    } else {
        end.map(month_year).unwrap_or_default()
    };
    format!("{} – {}", month_year(start), until)
}

fn stylesheet(format: CvFormat) -> &'static str {
    match format {
        CvFormat::Modern => {
            "body { font-family: 'Segoe UI', Helvetica, Arial, sans-serif; color: #1f2933; \
             margin: 2.2em; line-height: 1.45; } \
             h1 { color: #0b7285; margin-bottom: 0; } \
             h2 { color: #0b7285; border-bottom: 2px solid #0b7285; padding-bottom: 2px; } \
             .subtitle { color: #495057; font-size: 1.1em; margin-top: 2px; } \
             .meta { color: #868e96; font-size: 0.9em; } \
             .entry { margin-bottom: 1em; } \
             .tech { color: #0b7285; font-size: 0.85em; }"
        }
        CvFormat::Classic => {
            "body { font-family: Georgia, 'Times New Roman', serif; color: #212529; \
             margin: 2.5em; line-height: 1.5; } \
             h1 { text-align: center; margin-bottom: 0; } \
             h2 { border-bottom: 1px solid #212529; text-transform: uppercase; \
             font-size: 1em; letter-spacing: 1px; } \
             .subtitle { text-align: center; font-style: italic; margin-top: 2px; } \
             .meta { font-size: 0.9em; } \
             .entry { margin-bottom: 1em; } \
             .tech { font-size: 0.85em; }"
        }
        CvFormat::Minimal => {
            "body { font-family: Helvetica, Arial, sans-serif; color: #000; \
             margin: 2em; line-height: 1.4; } \
             h1 { font-weight: 600; margin-bottom: 0; } \
             h2 { font-size: 1em; font-weight: 600; margin-bottom: 4px; } \
             .subtitle { margin-top: 2px; } \
             .meta { font-size: 0.9em; } \
             .entry { margin-bottom: 0.8em; } \
             .tech { font-size: 0.85em; }"
        }
    }
}

fn header_section(data: &CurriculumData) -> String {
    format!(
        "<header><h1>{}</h1><p class=\"subtitle\">{}</p>\
         <p class=\"meta\">{} · {} · {}</p></header>",
        escape(&data.name),
        escape(&data.title),
        escape(&data.email),
        escape(&data.phone),
        escape(&data.location)
    )
}

fn summary_section(data: &CurriculumData) -> String {
    format!(
        "<section><h2>Summary</h2><p>{}</p></section>",
        escape(&data.summary)
    )
}

fn experience_section(data: &CurriculumData) -> String {
    let entries: String = data
        .experience
        .iter()
        .map(|e| {
            let achievements: String = e
                .achievements
                .iter()
                .map(|a| format!("<li>{}</li>", escape(a)))
                .collect();
            let achievements = if achievements.is_empty() {
                String::new()
            } else {
                format!("<ul>{achievements}</ul>")
            };
            let technologies = if e.technologies.is_empty() {
                String::new()
            } else {
                format!(
                    "<p class=\"tech\">{}</p>",
                    escape(&e.technologies.join(" · "))
                )
            };
            format!(
                "<div class=\"entry\"><strong>{}</strong> — {}<br>\
                 <span class=\"meta\">{} · {} · {}</span>\
                 <p>{}</p>{achievements}{technologies}</div>",
                escape(&e.title),
                escape(&e.company),
                escape(&e.location),
                span_label(e.start_date, e.end_date, e.is_current),
                escape(&e.duration),
                escape(&e.description)
            )
        })
        .collect();
    format!("<section><h2>Experience</h2>{entries}</section>")
}

fn education_section(data: &CurriculumData) -> String {
    let entries: String = data
        .education
        .iter()
        .map(|e| {
            let achievements: String = e
                .achievements
                .iter()
                .map(|a| format!("<li>{}</li>", escape(a)))
                .collect();
            let achievements = if achievements.is_empty() {
                String::new()
            } else {
                format!("<ul>{achievements}</ul>")
            };
            format!(
                "<div class=\"entry\"><strong>{}</strong> — {}<br>\
                 <span class=\"meta\">{} · {}</span>\
                 <p>{}</p>{achievements}</div>",
                escape(&e.degree),
                escape(&e.institution),
                escape(&e.location),
                span_label(e.start_date, e.end_date, false),
                escape(&e.description)
            )
        })
        .collect();
    format!("<section><h2>Education</h2>{entries}</section>")
}

fn skills_section(data: &CurriculumData) -> String {
    let groups: String = data
        .skills
        .iter()
        .map(|g| {
            format!(
                "<div class=\"entry\"><strong>{}</strong>: {}</div>",
                escape(&title_case(&g.category)),
                escape(&g.skills.join(", "))
            )
        })
        .collect();
    format!("<section><h2>Skills</h2>{groups}</section>")
}

fn achievements_section(data: &CurriculumData) -> String {
    let entries: String = data
        .achievements
        .iter()
        .map(|a| {
            format!(
                "<div class=\"entry\"><strong>{}</strong> — {}<br>\
                 <span class=\"meta\">{}</span><p>{}</p></div>",
                escape(&a.title),
                escape(&a.organization),
                month_year(a.date),
                escape(&a.description)
            )
        })
        .collect();
    format!("<section><h2>Achievements</h2>{entries}</section>")
}

fn contact_section(data: &CurriculumData) -> String {
    let mut links = Vec::new();
    if !data.website.is_empty() {
        links.push(escape(&data.website));
    }
    if !data.social.linkedin.is_empty() {
        links.push(escape(&data.social.linkedin));
    }
    if !data.social.github.is_empty() {
        links.push(escape(&data.social.github));
    }
    if !data.social.twitter.is_empty() {
        links.push(escape(&data.social.twitter));
    }
    format!(
        "<section><h2>Contact</h2><p class=\"meta\">{}</p></section>",
        links.join(" · ")
    )
}

/// Snake-case skill categories read better title-cased in print.
fn title_case(raw: &str) -> String {
    raw.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the curriculum to a self-contained HTML document.
pub fn render(data: &CurriculumData, format: CvFormat, sections: &[CvSection]) -> String {
    let body: String = sections
        .iter()
        .map(|section| match section {
            CvSection::Header => header_section(data),
            CvSection::Summary => summary_section(data),
            CvSection::Experience => experience_section(data),
            CvSection::Education => education_section(data),
            CvSection::Skills => skills_section(data),
            CvSection::Achievements => achievements_section(data),
            CvSection::Contact => contact_section(data),
        })
        .collect();

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\">\
         <title>{} - CV</title><style>{}</style></head>\
         <body>{body}</body></html>",
        escape(&data.name),
        stylesheet(format)
    )
}

/// Wraps rendered content into an interactive print page for when no PDF
/// renderer is installed. The banner and dialog vanish in print media.
pub fn print_fallback(html_content: &str, name: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\">\
         <title>{} - CV</title><style>\
         @media print {{ body {{ margin: 0; }} .no-print {{ display: none !important; }} }}\
         .print-instructions {{ background: #fff3cd; border: 1px solid #ffecb5; \
         border-radius: 5px; padding: 15px; margin: 20px; text-align: center; }}\
         .cv-content {{ margin: 20px; }}\
         </style></head><body>\
         <div class=\"print-instructions no-print\">\
         <h3>PDF generation not available</h3>\
         <p>To save this page as a PDF:</p>\
         <ol style=\"display: inline-block; text-align: left;\">\
         <li>Press <kbd>Ctrl+P</kbd> (or <kbd>Cmd+P</kbd> on Mac)</li>\
         <li>Select \"Save as PDF\" as the destination</li>\
         <li>Click \"Save\"</li>\
         </ol><br>\
         <button onclick=\"window.print()\">Print now</button>\
         </div>\
         <div class=\"cv-content\">{html_content}</div>\
         <script>\
         window.addEventListener('load', function() {{\
         setTimeout(function() {{ window.print(); }}, 1000);\
         }});\
         </script>\
         </body></html>",
        escape(name)
    )
}
