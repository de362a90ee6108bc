//! rTimediff main entrypoint.

use rtimediff::run;
use rtimediff::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
