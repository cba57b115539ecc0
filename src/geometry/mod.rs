mod circle;
mod line;
mod rect;
mod vec2;

pub use circle::Circle;
pub use line::{Line, LineFormula};
pub use rect::Rect;
pub use vec2::Vec2;
