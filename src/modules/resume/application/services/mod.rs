pub mod curriculum_html;
pub mod example_content;
