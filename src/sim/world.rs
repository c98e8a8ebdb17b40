use super::Vector3;
use chrono::Timelike;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraViewMode {
    Interior,
    InteriorLookAhead,
    Exterior,
    Track,
    FlyBy,
    FlyByZooming,
}

impl Default for CameraViewMode {
    fn default() -> Self {
        CameraViewMode::Interior
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    pub mode: CameraViewMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignalAspect {
    /// Aspect number as used by signal objects, `0` is red.
    pub number: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    pub aspects: Vec<SignalAspect>,
    /// Index into `aspects`; out of range means no aspect.
    pub current_aspect: i32,
}

impl Section {
    pub fn aspect_number(&self) -> f64 {
        if self.current_aspect < 0 {
            return 0.0;
        }
        self.aspects
            .get(self.current_aspect as usize)
            .map_or(0.0, |aspect| aspect.number as f64)
    }
}

/// Panel exposed by the player train's safety system plugin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SafetyPlugin {
    pub enabled: bool,
    pub panel: Vec<i32>,
}

impl SafetyPlugin {
    pub fn panel_state(&self, operand: f64) -> f64 {
        if !self.enabled || !operand.is_finite() {
            return 0.0;
        }
        let index = operand.round_ties_even();
        if index < 0.0 {
            return 0.0;
        }
        self.panel.get(index as usize).map_or(0.0, |v| *v as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayedTimetable {
    None,
    Default,
    Custom,
}

impl Default for DisplayedTimetable {
    fn default() -> Self {
        DisplayedTimetable::None
    }
}

/// Simulation state shared by every script evaluated in a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    pub seconds_since_midnight: f64,
    pub camera: Camera,
    pub sections: Vec<Section>,
    pub plugin: SafetyPlugin,
    pub timetable: DisplayedTimetable,
}

impl World {
    /// Sets the clock from the local wall clock, for hosts that do not
    /// simulate time.
    pub fn use_local_time(&mut self) {
        let now = chrono::Local::now();
        self.seconds_since_midnight =
            now.num_seconds_from_midnight() as f64 + now.nanosecond() as f64 * 1e-9;
    }

    pub fn section(&self, index: i32) -> Option<&Section> {
        if index < 0 {
            None
        } else {
            self.sections.get(index as usize)
        }
    }

    pub fn timetable_visible(&self) -> bool {
        match self.timetable {
            DisplayedTimetable::Default | DisplayedTimetable::Custom => true,
            DisplayedTimetable::None => false,
        }
    }
}
