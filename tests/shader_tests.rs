// Host-side checks on the bundled WGSL: every entry point the renderer names
// exists, and the composite reads only the scene target.

const BACKDROP: &str = include_str!("../shaders/backdrop.wgsl");
const SCENE: &str = include_str!("../shaders/scene.wgsl");
const POST: &str = include_str!("../shaders/post.wgsl");

fn entry_points(src: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut lines = src.lines();
    while let Some(line) = lines.next() {
        if line.starts_with("@vertex") || line.starts_with("@fragment") {
            if let Some(name) = lines
                .next()
                .and_then(|l| l.strip_prefix("fn "))
                .and_then(|l| l.split('(').next())
            {
                out.push(name);
            }
        }
    }
    out
}

#[test]
fn renderer_entry_points_exist() {
    assert_eq!(entry_points(BACKDROP), ["vs_fullscreen", "fs_backdrop"]);
    assert_eq!(entry_points(SCENE), ["vs_mesh", "fs_mesh", "vs_stars", "fs_stars"]);
    assert_eq!(entry_points(POST), ["vs_fullscreen", "fs_composite"]);
}

#[test]
fn composite_reads_only_the_scene() {
    assert_eq!(POST.matches("texture_2d<f32>").count(), 1);
    assert!(!POST.contains("@group(1)"));
    // uniform block stays at eight floats to match the host struct
    let block = POST
        .split("struct Post {")
        .nth(1)
        .and_then(|s| s.split("};").next())
        .unwrap_or_default();
    let fields: Vec<&str> = block
        .lines()
        .filter_map(|l| l.trim().split(':').next())
        .filter(|f| !f.is_empty())
        .collect();
    assert_eq!(fields, ["resolution", "time", "scanline_opacity", "vignette"]);
}
