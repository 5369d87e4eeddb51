//! Prompt construction for section generation.
//!
//! Pure string templating: no I/O, no failure modes. The cover section gets
//! its own template asking for a `"Name - tagline"` line; every other section
//! shares one template that embeds the full context record and a fixed set of
//! style directives.

use crate::context::StartupContext;
use crate::section::Section;

/// Build the generation prompt for one section.
pub fn build_prompt(section: Section, context: &StartupContext) -> String {
    match section {
        Section::Cover => cover_prompt(context),
        _ => content_prompt(section, context),
    }
}

fn cover_prompt(context: &StartupContext) -> String {
    format!(
        "Create a compelling cover slide for a startup pitch deck.\n\
         Startup Name: {name}\n\
         Industry: {industry}\n\
         Create a tagline that captures the essence of the startup.\n\
         Format: Return only the text in this format: \"{name} - [tagline]\"\n\
         Keep it concise and impactful.",
        name = context.startup_name,
        industry = context.industry,
    )
}

fn content_prompt(section: Section, context: &StartupContext) -> String {
    format!(
        "As an expert pitch deck generator, create content for the {section} section \
         of a startup pitch deck.\n\
         Startup Name: {name}\n\
         Context:\n\
         {block}\
         Requirements:\n\
         - Be concise and impactful\n\
         - Focus on key points only\n\
         - Use bullet points where appropriate\n\
         - Maintain professional tone\n\
         - Be specific and data-driven where possible\n\
         Output only the content, no explanations.",
        section = section.wire_name(),
        name = context.startup_name,
        block = context.prompt_block(),
    )
}
