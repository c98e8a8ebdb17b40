/*!
## Simulation Module

Read-only snapshot of the simulation that scripts query: trains and their
cars, the driver's handles, the camera, route sections and the safety
plugin panel.

*/

mod context;
mod handles;
mod train;
mod vector;
mod world;

pub use context::Context;
pub use handles::{BrakeHandle, BrakeHandleKind, Handles, PowerHandle, ReverserHandle};
pub use train::{
    Axle, BrakeSystemKind, Car, CarBrake, CarBrightness, Door, DoorSide, Train,
};
pub use vector::Vector3;
pub use world::{
    Camera, CameraViewMode, DisplayedTimetable, SafetyPlugin, Section, SignalAspect, World,
};
