//! GFX page: screen bounds and glyph placement check.

use super::DebugPage;
use crate::config::{FIRST_ROW, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::graphics::Graphics;

/// Outline of the full screen plus a single glyph at the first text row.
pub struct GfxPage;

impl DebugPage for GfxPage {
    fn render(
        &self,
        gfx: &mut dyn Graphics,
    ) {
        gfx.draw_frame(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        gfx.set_print_pos(0, FIRST_ROW);
        gfx.print("W");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FrameCanvas;
    use crate::canvas::tests::Capture;
    use crate::graphics::recorder::{DrawOp, Recorder};

    #[test]
    fn test_gfx_page_ops() {
        let mut gfx = Recorder::new();
        GfxPage.render(&mut gfx);
        assert_eq!(
            gfx.ops,
            [
                DrawOp::Frame(0, 0, 128, 64),
                DrawOp::Pos(0, 12),
                DrawOp::Text("W".into()),
            ]
        );
    }

    #[test]
    fn test_gfx_page_on_canvas() {
        let mut canvas = FrameCanvas::new(Capture::default());
        GfxPage.render(&mut canvas);
        let frame = canvas.frame();
        assert!(frame.is_set(0, 0));
        assert!(frame.is_set(127, 0));
        assert!(frame.is_set(0, 63));
        assert!(frame.is_set(127, 63));
        // glyph sits inside the outline, below the title row
        assert!((1..6).any(|x| (12..22).any(|y| frame.is_set(x, y))));
    }
}
