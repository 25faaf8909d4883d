extern crate chronal_calibration as calibration;
extern crate failure;

use calibration::{logging, open_input, total, INPUT_PATH};
use failure::Error;

fn main() -> Result<(), Error> {
    logging::init()?;

    let frequency = total(open_input(INPUT_PATH)?)?;
    println!("{}", frequency);

    Ok(())
}
