use std::error::Error;
use std::fs;
use std::path::Path;

use crate::state::State;
use crate::LoadPuzzle;

impl<P: AsRef<Path> + ?Sized> LoadPuzzle for P {
    fn load_puzzle(&self) -> Result<State, Box<dyn Error>> {
        let path = self.as_ref();
        debug!("Loading puzzle from {}", path.display());
        let text = fs::read_to_string(path)?;
        Ok(text.parse()?)
    }
}
