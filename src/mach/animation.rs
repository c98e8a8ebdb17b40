use super::Script;
use crate::sim::Context;
use rand::Rng;

/// ## Animated element driver
///
/// Evaluates a script once per frame and pins the result into an optional
/// range. A script that fails is reported once and then frozen at its
/// previous value until [`Animation::reset`] is called.
#[derive(Debug, Clone)]
pub struct Animation {
    script: Script,
    minimum: Option<f64>,
    maximum: Option<f64>,
    faulted: bool,
}

impl Animation {
    pub fn new(script: Script) -> Animation {
        Animation {
            script,
            minimum: None,
            maximum: None,
            faulted: false,
        }
    }

    pub fn with_minimum(self, minimum: f64) -> Animation {
        Animation {
            minimum: Some(minimum),
            ..self
        }
    }

    pub fn with_maximum(self, maximum: f64) -> Animation {
        Animation {
            maximum: Some(maximum),
            ..self
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Lets a faulted element run again.
    pub fn reset(&mut self) {
        if self.faulted {
            log::debug!("animation reset after fault: {}", self.script);
        }
        self.faulted = false;
    }

    /// Evaluates the script and returns the pinned result. The script's
    /// last result keeps the unpinned value.
    pub fn update<R: Rng + ?Sized>(&mut self, ctx: &Context<'_>, rng: &mut R) -> f64 {
        if !self.faulted {
            if let Err(error) = self.script.evaluate(ctx, rng) {
                log::error!("animation function failed: {} in `{}`", error, self.script);
                self.faulted = true;
            }
        }
        self.pin(self.script.last_result())
    }

    fn pin(&self, value: f64) -> f64 {
        let mut value = value;
        if let Some(min) = self.minimum {
            if value < min {
                value = min;
            }
        }
        if let Some(max) = self.maximum {
            if value > max {
                value = max;
            }
        }
        value
    }
}
