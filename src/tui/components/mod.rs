// Render components for the page
//
// Each component draws one region of the frame from &App state. All stateful
// behavior lives in App; these are pure painters.

pub mod form;
pub mod header;
pub mod notification;
pub mod sections;
