use std::env;

fn main() {
    let locator = env::args().nth(1).expect("usage: vibrance <image>");

    for hex in vibrance::extract_colors(&locator) {
        println!("{}", hex);
    }
}
