pub mod clock;
pub mod digest;
pub mod template;

use std::io;
use std::path::Path;

pub fn write_readme(path: &Path, document: &str) -> io::Result<()> {
    std::fs::write(path, document)
}
