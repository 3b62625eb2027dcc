// Unit tests for report module components
//
// - formatter: Markdown formatting utilities
// - render: Full report rendering from a synthesized book

pub mod formatter_tests;
pub mod render_tests;
