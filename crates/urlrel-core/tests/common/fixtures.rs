//! Fixture tables shared by the integration tests.

/// Well-formed absolute URLs with no dot segments.
pub const ABSOLUTE_URLS: &[&str] = &[
    "https://example.com/a/b.js",
    "http://user@example.com:8080/x/y?q=1#frag",
    "https://cdn.example.com/lib/v1/app.min.js.map?v=3",
    "ftp://files.example.org:2121/pub/file.tar.gz",
    "https://example.com/dir/#section",
    "webpack://example.com/src/index.ts",
];

/// `(from, to, expected)` for `relative`.
pub const RELATIVE_CASES: &[(&str, &str, &str)] = &[
    (
        "/root/dir/",
        "https://input.com/nested/file.js",
        "https://input.com/nested/file.js",
    ),
    ("deep/dir/", "deep/dir/../bar/main.js.map", "../bar/main.js.map"),
    ("../file", "../../../bar/main.js.map", "../../bar/main.js.map"),
    (
        "https://example.com/assets/js/",
        "https://example.com/assets/maps/app.js.map",
        "../maps/app.js.map",
    ),
    (
        "https://example.com/assets/js/app.js",
        "https://example.com/assets/js/app.js.map",
        "app.js.map",
    ),
    (
        "https://example.com/a/",
        "https://other.com/a/b.js",
        "//other.com/a/b.js",
    ),
    ("/root/dir/file.js", "/root/dir/file.js.map", "file.js.map"),
    ("/root/a/b/c/", "/root/x.js", "../../../x.js"),
    ("src/", "src/lib/mod.ts", "lib/mod.ts"),
    ("./src/", "./src/lib/mod.ts", "./lib/mod.ts"),
    ("src/lib/", "src/", "../"),
    ("file:///root/dir/", "file:///root/main.js.map", "../main.js.map"),
    ("a/b/", "?q", "../../?q"),
    ("a/", "#h", "../#h"),
    ("../", "..", "."),
    ("..", "..", "."),
    ("../", "../", "."),
    ("../a/", "../a/..", "../"),
    ("a/", "../..", "../../.."),
    (
        "https://a@example.com/d/",
        "https://b@example.com/d/f.js",
        "//b@example.com/d/f.js",
    ),
    (
        "https://a@example.com/d/",
        "https://a@example.com/e.js",
        "../e.js",
    ),
    ("file://srv/a/", "file:///a/b.js", "///a/b.js"),
];

/// `(from, to)` pairs where `relative` must fail.
pub const UNRESOLVABLE_CASES: &[(&str, &str)] = &[
    ("../a/", "b.js"),
    ("../../a/b/", "../x.js"),
    ("../dir/", "file.js"),
    ("../../", ".."),
];

/// `(input, base, expected)` for `resolve`.
pub const RESOLVE_CASES: &[(&str, Option<&str>, &str)] = &[
    ("main.js.map", Some("https://example.com/dist/main.js"), "https://example.com/dist/main.js.map"),
    ("../src/a.ts", Some("https://example.com/dist/main.js"), "https://example.com/src/a.ts"),
    ("/abs.js", Some("https://example.com/dist/main.js"), "https://example.com/abs.js"),
    ("//cdn.com/x.js", Some("http://example.com/"), "http://cdn.com/x.js"),
    ("x.js", Some("//cdn.com/lib/"), "//cdn.com/lib/x.js"),
    ("x.js", Some("/root/dir/file.js"), "/root/dir/x.js"),
    ("x.js", Some("file:///root/dir/file.js"), "file:///root/dir/x.js"),
    ("x.js", Some("file:root/dir/"), "file:///root/dir/x.js"),
    ("../../x.js", Some("dir/"), "../x.js"),
    ("./a/./b/../c.js", None, "./a/c.js"),
    ("a/b/", None, "a/b/"),
    ("", Some("?q"), "?q"),
    ("#h", Some("?q#old"), "?q#h"),
];
