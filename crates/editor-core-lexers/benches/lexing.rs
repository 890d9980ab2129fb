use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use editor_core_lexlib::{Document, TextDocument};

fn large_cpp(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        match i % 4 {
            0 => out.push_str(&format!("int f{i}(int x) {{ // entry {i}\n")),
            1 => out.push_str("    const char *s = \"text\\n\";\n"),
            2 => out.push_str(&format!("    return x * {i} + 0x1F;\n")),
            _ => out.push_str("}\n"),
        }
    }
    out
}

fn large_lua(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 40);
    for i in 0..line_count {
        match i % 3 {
            0 => out.push_str(&format!("local t{i} = {{ name = 'x', n = {i} }} -- entry\n")),
            1 => out.push_str("print(string.format([[%d]], 1))\n"),
            _ => out.push_str("--[[ block\ncomment ]]\n"),
        }
    }
    out
}

fn bench_cpp_full(c: &mut Criterion) {
    let text = large_cpp(20_000);
    let catalogue = editor_core_lexers::catalogue();
    c.bench_function("cpp/full_20k_lines", |b| {
        b.iter_batched(
            || {
                let mut lexer = catalogue.create_by_name("cpp").unwrap();
                lexer.word_list_set(0, "int char const return");
                lexer.property_set("fold", "1");
                (lexer, TextDocument::new(&text))
            },
            |(mut lexer, mut doc)| {
                lexer.lex(0, doc.len(), 0, &mut doc);
                lexer.fold(0, doc.len(), 0, &mut doc);
                black_box(doc.styles().len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_cpp_relex_tail(c: &mut Criterion) {
    let text = large_cpp(20_000);
    let mut lexer = editor_core_lexers::catalogue().create_by_name("cpp").unwrap();
    lexer.word_list_set(0, "int char const return");
    let mut doc = TextDocument::new(&text);
    lexer.lex(0, doc.len(), 0, &mut doc);

    // Re-lex the last hundred lines, as after typing near the end.
    let start = doc.line_start(doc.line_count() - 100);
    let init_style = doc.style_at(start - 1);
    c.bench_function("cpp/relex_100_lines", |b| {
        b.iter(|| {
            lexer.lex(start, doc.len() - start, init_style, &mut doc);
            black_box(doc.end_styled());
        })
    });
}

fn bench_lua_full(c: &mut Criterion) {
    let text = large_lua(20_000);
    let catalogue = editor_core_lexers::catalogue();
    c.bench_function("lua/full_20k_lines", |b| {
        b.iter_batched(
            || {
                let mut lexer = catalogue.create_by_name("lua").unwrap();
                lexer.word_list_set(0, "local function end return");
                lexer.word_list_set(1, "print string.format");
                (lexer, TextDocument::new(&text))
            },
            |(mut lexer, mut doc)| {
                lexer.lex(0, doc.len(), 0, &mut doc);
                black_box(doc.styles().len());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_cpp_full, bench_cpp_relex_tail, bench_lua_full);
criterion_main!(benches);
