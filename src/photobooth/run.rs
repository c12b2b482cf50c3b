use super::{core::Effect, main::Photobooth};
use crate::photobooth::core::{init, transition};

impl Photobooth {
    /// Runs the session until it is disposed.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let receiver = self
            .event_receiver
            .lock()
            .map_err(|_| "Session receiver is poisoned")?;

        let (mut current_model, effects) = init(&self.config);

        self.device_display
            .lock()
            .map_err(|e| e.to_string())?
            .init()?;
        self.render.render(&current_model)?;

        self.execute_effects(effects);

        loop {
            let msg = receiver.recv()?;

            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nmsg:\n\t{}",
                current_model,
                msg.to_display_string(),
            ));

            let (new_model, effects) = transition(&self.config, current_model, msg);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model, effects
            ));

            current_model = new_model;

            self.render.render(&current_model)?;

            if current_model.is_disposed() {
                // Finish teardown before returning.
                for effect in effects {
                    self.interpret_effect(effect);
                }
                return Ok(());
            }

            self.execute_effects(effects);
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }
}
