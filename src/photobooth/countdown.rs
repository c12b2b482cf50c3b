/// Countdown shown before each snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Countdown {
    #[default]
    Idle,
    Counting(u8),
}

/// What a single tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    /// Still counting; the value to show next.
    Show(u8),
    /// Reached zero. Take the snapshot.
    Fire,
    /// Tick arrived while idle.
    Ignored,
}

impl Countdown {
    /// A zero start fires on the first tick.
    pub fn start(from: u8) -> Self {
        Countdown::Counting(from)
    }

    pub fn tick(self) -> (Countdown, CountdownStep) {
        match self {
            Countdown::Idle => (Countdown::Idle, CountdownStep::Ignored),
            Countdown::Counting(n) if n <= 1 => (Countdown::Idle, CountdownStep::Fire),
            Countdown::Counting(n) => (Countdown::Counting(n - 1), CountdownStep::Show(n - 1)),
        }
    }

    pub fn is_counting(&self) -> bool {
        matches!(self, Countdown::Counting(_))
    }

    pub fn remaining(&self) -> Option<u8> {
        match self {
            Countdown::Idle => None,
            Countdown::Counting(n) => Some(*n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_from_three_then_fires_once() {
        let mut countdown = Countdown::start(3);
        let mut shown = vec![countdown.remaining().unwrap()];
        let mut fired = 0;

        for _ in 0..5 {
            let (next, step) = countdown.tick();
            countdown = next;
            match step {
                CountdownStep::Show(n) => shown.push(n),
                CountdownStep::Fire => fired += 1,
                CountdownStep::Ignored => {}
            }
        }

        assert_eq!(shown, vec![3, 2, 1]);
        assert_eq!(fired, 1);
        assert_eq!(countdown, Countdown::Idle);
    }

    #[test]
    fn test_idle_tick_is_ignored() {
        assert_eq!(
            Countdown::Idle.tick(),
            (Countdown::Idle, CountdownStep::Ignored)
        );
    }
}
