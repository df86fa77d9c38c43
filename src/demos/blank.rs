//! Empty window loop

use crate::consts::TUTORIAL_TICK_RATE;
use crate::error::Result;
use crate::platform::{FrameClock, InputSource, Surface};
use crate::renderer::colors;

/// Clear to the tutorial background every frame until close. Returns frames shown.
pub fn run_blank<P, C>(platform: &mut P, clock: &mut C) -> Result<u64>
where
    P: InputSource + Surface,
    C: FrameClock,
{
    let mut frames = 0;
    loop {
        platform.poll()?;
        if platform.close_requested() {
            break;
        }

        platform.clear(colors::TUTORIAL_BACKGROUND)?;
        platform.present()?;
        frames += 1;

        clock.tick(TUTORIAL_TICK_RATE);
    }
    log::info!("Blank loop closed after {} frames", frames);
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::platform::{DrawCommand, HeadlessPlatform, ManualClock};

    #[test]
    fn test_runs_until_close() {
        let mut platform = HeadlessPlatform::new(IVec2::new(1280, 720)).close_on_poll(4);
        let mut clock = ManualClock::default();
        let frames = run_blank(&mut platform, &mut clock).unwrap();

        assert_eq!(frames, 3);
        assert_eq!(clock.ticks, vec![60; 3]);
        for frame in &platform.frames {
            assert_eq!(frame, &vec![DrawCommand::Clear(colors::TUTORIAL_BACKGROUND)]);
        }
    }
}
