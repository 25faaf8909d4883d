extern crate chronal_calibration as calibration;
extern crate failure;

use calibration::repeat::first_repeat;
use calibration::{logging, open_input, parse_deltas, INPUT_PATH};
use failure::Error;

fn main() -> Result<(), Error> {
    logging::init()?;

    let changes = parse_deltas(open_input(INPUT_PATH)?)?;
    match first_repeat(&changes) {
        Some(frequency) => println!("{}", frequency),
        None => println!("never found a repeating value"),
    }

    Ok(())
}
