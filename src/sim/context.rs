use super::{Car, CameraViewMode, Train, Vector3, World};

/// ## Per-call evaluation context
///
/// Everything a script may read while it runs. The host builds one for
/// each animated element it evaluates in a frame.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    pub world: &'a World,
    pub train: Option<&'a Train>,
    pub car_index: usize,
    /// World position of the animated element.
    pub position: Vector3,
    pub track_position: f64,
    /// Section the element belongs to when it is not part of a train.
    pub section_index: i32,
    pub is_part_of_train: bool,
    /// Seconds since the previous evaluation.
    pub time_elapsed: f64,
    /// State of the owning object, for objects with several states.
    pub current_state: i32,
}

impl<'a> Context<'a> {
    pub fn new(world: &'a World) -> Context<'a> {
        Context {
            world,
            train: None,
            car_index: 0,
            position: Vector3::default(),
            track_position: 0.0,
            section_index: -1,
            is_part_of_train: false,
            time_elapsed: 0.0,
            current_state: 0,
        }
    }

    /// Attaches the element to car `car_index` of `train`.
    pub fn with_train(self, train: &'a Train, car_index: usize) -> Context<'a> {
        Context {
            train: Some(train),
            car_index,
            is_part_of_train: true,
            ..self
        }
    }

    /// Lets train queries see `train` without making the element part of it,
    /// as for a route object reacting to a passing train.
    pub fn near_train(self, train: &'a Train) -> Context<'a> {
        Context {
            train: Some(train),
            is_part_of_train: false,
            ..self
        }
    }

    pub fn at(self, position: Vector3, track_position: f64) -> Context<'a> {
        Context {
            position,
            track_position,
            ..self
        }
    }

    pub fn in_section(self, section_index: i32) -> Context<'a> {
        Context {
            section_index,
            ..self
        }
    }

    pub fn with_elapsed(self, time_elapsed: f64) -> Context<'a> {
        Context {
            time_elapsed,
            ..self
        }
    }

    pub fn with_state(self, current_state: i32) -> Context<'a> {
        Context {
            current_state,
            ..self
        }
    }

    /// The car the element belongs to.
    pub fn own_car(&self) -> Option<&'a Car> {
        self.train.and_then(|train| train.cars.get(self.car_index))
    }

    /// Applies `f` to the train, or yields `0.0` without one.
    #[inline]
    pub fn train_or_zero<F: FnOnce(&'a Train) -> f64>(&self, f: F) -> f64 {
        self.train.map_or(0.0, f)
    }

    /// Applies `f` to the element's own car, or yields `0.0`.
    #[inline]
    pub fn own_car_or_zero<F: FnOnce(&'a Car) -> f64>(&self, f: F) -> f64 {
        self.own_car().map_or(0.0, f)
    }

    /// Applies `f` to the car selected by a script operand, or yields `0.0`.
    #[inline]
    pub fn car_or_zero<F: FnOnce(&'a Car) -> f64>(&self, operand: f64, f: F) -> f64 {
        self.train
            .and_then(|train| train.car(operand))
            .map_or(0.0, f)
    }

    pub fn camera_offset(&self) -> Vector3 {
        self.world.camera.position - self.position
    }

    pub fn camera_view(&self) -> f64 {
        match self.world.camera.mode {
            CameraViewMode::Interior => 0.0,
            _ => 1.0,
        }
    }

    pub fn car_number(&self) -> f64 {
        if self.is_part_of_train {
            self.car_index as f64
        } else {
            -1.0
        }
    }

    /// Signal aspect number of the section ahead of the train the element
    /// belongs to, or of the element's own section.
    pub fn section_aspect(&self) -> f64 {
        let index = if self.is_part_of_train {
            match self.train {
                Some(train) => train.current_section_index + 1,
                None => return 0.0,
            }
        } else {
            self.section_index
        };
        self.world
            .section(index)
            .map_or(0.0, |section| section.aspect_number())
    }

    pub fn plugin_available(&self) -> f64 {
        match self.train {
            Some(train) if train.is_player && self.world.plugin.enabled => 1.0,
            _ => 0.0,
        }
    }

    pub fn plugin_state(&self, operand: f64) -> f64 {
        match self.train {
            Some(_) => self.world.plugin.panel_state(operand),
            None => 0.0,
        }
    }
}
