mod verify;
pub use verify::*;

mod ocr;
pub use ocr::*;
