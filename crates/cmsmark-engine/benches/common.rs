// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_cms_content(size: usize) -> String {
    let base = "# Weekly specials\n\n\
        Fresh **paneer tikka** and *masala chai* all week. Watch https://youtu.be/xyz789 \
        or see www.menu.io/today and [btn: Order](https://menu.io/order).\n\n\
        > Best in town\n\n\
        1. Order online\n2. Pick up\n\n\
        - Veg\n- Non-veg\n\n\
        | Dish | Price |\n|---|---|\n| Dal | 120 |\n\n\
        ```text\nraw **not bold**\n```\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_link_heavy_paragraph(links: usize) -> String {
    let mut content = String::from("Links:");
    for i in 0..links {
        match i % 5 {
            0 => content.push_str(&format!(" https://youtube.com/watch?v=id{i}")),
            1 => content.push_str(&format!(" https://vimeo.com/{i}")),
            2 => content.push_str(&format!(" www.pics{i}.io/photo.jpg")),
            3 => content.push_str(&format!(" cdn{i}.io/clip.mp4")),
            _ => content.push_str(&format!(" https://shop{i}.io/menu")),
        }
    }
    content
}

/// Long runs of unclosed delimiters: every position is a candidate start.
#[allow(dead_code)]
pub fn generate_adversarial(kind: &str, len: usize) -> String {
    match kind {
        "stars" => "*".repeat(len),
        "brackets" => "[".repeat(len) + "](",
        "backticks" => "`".repeat(len),
        "www" => "www.".repeat(len),
        _ => "x".repeat(len),
    }
}
