use std::io;

use skrolla::{FetchMode, FrameSequence, ViewerOptions, WebGlViewer};

/// Number of frames in the bundled sequence.
const SEQUENCE_LENGTH: u32 = 179;

fn main() -> io::Result<()> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let frames =
        FrameSequence::new((1..=SEQUENCE_LENGTH).map(|i| format!("assets/sequence/drift_{i}.jpg")));

    let viewer = WebGlViewer::new_with_options(
        frames,
        ViewerOptions::new()
            .canvas_selector(".skrolla")
            .fetch_mode(FetchMode::Preload),
    )?;
    viewer.run()?;

    Ok(())
}
