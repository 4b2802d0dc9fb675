use vibrance::{image::io::Reader as ImageReader, Palette};

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).expect("usage: basic <image>");

    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = Palette::from_image(buf).generate();

    println!("{:#?}", palette);
}
