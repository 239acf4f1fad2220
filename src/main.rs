use backdrop::{Backdrop, Variant};

fn main() {
    let variant = match std::env::args().nth(1).as_deref() {
        Some("starfield") | Some("stars") => Variant::Starfield,
        _ => Variant::Grid,
    };

    if let Err(e) = Backdrop::new(variant).run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
