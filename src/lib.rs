// spriterig: the runtime core of a lightweight 2D sprite-and-input layer.
//
// Three subsystems:
//
// - `assets`: content loading collaborator — texture handles, decoded pixel
//   data, base-path resolution.
// - `graphics`: texture atlas data model, descriptor parsing, sprite and
//   animated-sprite transform/playback, draw-command submission.
// - `input`: device-state aggregation, edge detection, and device-agnostic
//   input actions.
//
// The crate never creates a window, touches a GPU, or runs a game loop; those
// live behind the `SpriteBatch`, `ContentLoader`, and `DevicePoller`
// collaborator traits.

pub mod assets;
pub mod core;
pub mod graphics;
pub mod input;
