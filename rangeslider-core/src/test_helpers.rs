//! Recording slider backend for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::Selection;
use crate::slider::{
    validate_range, validate_step, ChangeListener, SliderBackend, SliderConfig, SliderError,
    SliderHandle, SliderUpdate,
};

#[derive(Default)]
pub struct Recorder {
    pub created: Vec<SliderConfig>,
    pub updates: Vec<SliderUpdate>,
    pub listeners: Vec<ChangeListener>,
    pub fail_create: bool,
}

impl Recorder {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub log: Rc<RefCell<Recorder>>,
}

impl RecordingBackend {
    /// Simulate a committed drag.
    pub fn fire_change(&self, values: Selection) {
        let mut listeners = std::mem::take(&mut self.log.borrow_mut().listeners);
        for listener in listeners.iter_mut() {
            listener(values);
        }
        self.log.borrow_mut().listeners = listeners;
    }
}

pub struct RecordingHandle {
    log: Rc<RefCell<Recorder>>,
}

impl SliderHandle for RecordingHandle {
    fn on_change(&mut self, listener: ChangeListener) {
        self.log.borrow_mut().listeners.push(listener);
    }

    fn update_options(&mut self, update: &SliderUpdate) -> Result<(), SliderError> {
        validate_range(&update.range)?;
        self.log.borrow_mut().updates.push(*update);
        Ok(())
    }
}

impl SliderBackend for RecordingBackend {
    type Handle = RecordingHandle;

    fn create(&mut self, config: SliderConfig) -> Result<RecordingHandle, SliderError> {
        if self.log.borrow().fail_create {
            return Err(SliderError::Backend("no container".into()));
        }
        validate_range(&config.range)?;
        validate_step(config.step)?;
        self.log.borrow_mut().created.push(config);
        Ok(RecordingHandle {
            log: Rc::clone(&self.log),
        })
    }
}
