// crates/domain/src/render.rs
//! Layout of the assembled single-file output.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::guard::{EmbedOutcome, EmittedBlock, Section};

/// Order in which emitted blocks are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// All header blocks first, then all implementation blocks.
    #[default]
    Sectioned,
    /// Blocks exactly as the checker emitted them.
    Interleaved,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub layout: Layout,
    pub annotate_mismatches: bool,
    /// Shown in the banner, usually the tool name and version.
    pub generator: String,
}

/// Render the checker's outcome for `target` as one text file.
pub fn render_single_file(target: &str, outcome: &EmbedOutcome, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(outcome.emitted.iter().map(|b| b.content().len() + 64).sum::<usize>() + 128);

    let _ = writeln!(out, "/* {} */", comment_safe(target));
    if !options.generator.is_empty() {
        let _ = writeln!(out, "/* assembled by {} */", comment_safe(&options.generator));
    }

    if options.annotate_mismatches {
        for report in &outcome.mismatches {
            let _ = writeln!(out, "{}", report.pragma_message());
        }
    }

    match options.layout {
        Layout::Interleaved => {
            for block in &outcome.emitted {
                push_block(&mut out, block);
            }
        }
        Layout::Sectioned => {
            for section in [Section::Header, Section::Implementation] {
                for block in outcome.emitted.iter().filter(|b| b.section() == section) {
                    push_block(&mut out, block);
                }
            }
        }
    }

    out
}

/// Keeps free text from closing the surrounding block comment early.
fn comment_safe(text: &str) -> String {
    text.replace("*/", "* /")
}

/// Implementation blocks sit behind the module's `<STEM>_IMPLEMENTATION` toggle.
fn push_block(out: &mut String, block: &EmittedBlock) {
    let _ = writeln!(
        out,
        "\n/* muembed: {} {} {} */",
        block.guard(),
        block.version(),
        block.section().as_str()
    );

    let content = block.content();
    let toggle = (block.section() == Section::Implementation && !content.is_empty())
        .then(|| block.guard().implementation_macro());

    if let Some(toggle) = &toggle {
        let _ = writeln!(out, "#ifdef {toggle}");
    }
    out.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        out.push('\n');
    }
    if let Some(toggle) = &toggle {
        let _ = writeln!(out, "#endif /* {toggle} */");
    }
}
