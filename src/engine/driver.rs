use std::time::Instant;

/// Host-side frame loop contract.
///
/// `init` acquires the backend (window, buffers); failures there are fatal.
/// `update` runs one frame and returns `false` once the host wants to quit.
pub trait FrameDriver {
    fn init(&mut self) -> anyhow::Result<()>;
    fn update(&mut self, dt: f32) -> bool;
    fn shutdown(&mut self);
}

/// Drive `driver` until `update` asks to stop. `dt` is wall-clock seconds
/// since the previous frame (0 for the first).
pub fn run<D: FrameDriver>(driver: &mut D) -> anyhow::Result<()> {
    driver.init()?;

    let mut frames = 0u64;
    let mut last = Instant::now();
    let mut dt = 0.0;
    while driver.update(dt) {
        frames += 1;
        let now = Instant::now();
        dt = (now - last).as_secs_f32();
        last = now;
    }

    driver.shutdown();
    tracing::info!(frames, "frame loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Scripted {
        log: Vec<&'static str>,
        frames_left: u32,
        fail_init: bool,
    }

    impl FrameDriver for Scripted {
        fn init(&mut self) -> anyhow::Result<()> {
            self.log.push("init");
            if self.fail_init {
                anyhow::bail!("no display");
            }
            Ok(())
        }

        fn update(&mut self, dt: f32) -> bool {
            assert!(dt >= 0.0);
            self.log.push("update");
            if self.frames_left == 0 {
                return false;
            }
            self.frames_left -= 1;
            true
        }

        fn shutdown(&mut self) {
            self.log.push("shutdown");
        }
    }

    #[test]
    fn phases_run_in_order() {
        let mut d = Scripted {
            frames_left: 2,
            ..Default::default()
        };
        run(&mut d).unwrap();
        assert_eq!(d.log, ["init", "update", "update", "update", "shutdown"]);
    }

    #[test]
    fn init_failure_skips_frames() {
        let mut d = Scripted {
            frames_left: 5,
            fail_init: true,
            ..Default::default()
        };
        let err = run(&mut d).unwrap_err();
        assert_eq!(err.to_string(), "no display");
        assert_eq!(d.log, ["init"]);
    }
}
