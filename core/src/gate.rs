use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct ProcessingGate {
    busy: Rc<Cell<bool>>,
}

impl ProcessingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    // The flag is released when the returned guard drops.
    pub fn try_begin(&self) -> Option<ProcessingGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(ProcessingGuard {
            busy: Rc::clone(&self.busy),
        })
    }
}

#[derive(Debug)]
pub struct ProcessingGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let gate = ProcessingGate::new();
        let guard = gate.try_begin().expect("first claim");
        assert!(gate.is_busy());
        assert!(gate.clone().try_begin().is_none());
        drop(guard);
        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn guard_releases_on_early_return() {
        fn work(gate: &ProcessingGate) -> Result<(), &'static str> {
            let _guard = gate.try_begin().ok_or("busy")?;
            Err("decode failed")
        }
        let gate = ProcessingGate::new();
        assert_eq!(work(&gate), Err("decode failed"));
        assert!(!gate.is_busy());
    }
}
