//! Debug pages shown by the debug menu.
//!
//! - `timing`: CPU clock, core tick and UI poll timing (CORE)
//! - `gfx`: display geometry check (GFX)
//! - `adc`: smoothed CV input readings (ADC)
//!
//! Each page borrows the instrumented state it displays. Applications add
//! their own pages by implementing [`DebugPage`].

mod adc;
mod gfx;
mod timing;

pub use adc::AdcPage;
pub use gfx::GfxPage;
pub use timing::CorePage;

use crate::graphics::Graphics;

/// A page that draws itself into the current frame.
///
/// Called between `begin_frame` and `end_frame`, after the menu header has
/// been printed on the title row.
pub trait DebugPage {
    fn render(
        &self,
        gfx: &mut dyn Graphics,
    );
}
