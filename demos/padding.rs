use kinsoku_layout::layout::{BlockAligner, HAlign, VAlign};
use kinsoku_layout::render::{ContentRenderer, Renderer};
use kinsoku_layout::{colours, Font, LayoutEngine, LayoutOptions, MonospaceMetrics, Pt};

fn main() {
    // pass a TrueType font on the command line to measure with real glyph widths,
    // otherwise every glyph is treated as one em wide
    let font = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(path).expect("can read font file");
            Font::load(bytes).expect("can load font")
        }
        None => Font::new("HeiseiKakuGo-W5", MonospaceMetrics::new(1.0)),
    };

    let mut engine = LayoutEngine::new();
    engine.add_font_family([font]);

    let text = concat!(
        "これはpdf-writerを使用して、自動的に折り返される長い「日本語」の文章のサンプルです。",
        "指定された幅を超えるとテキストは自動的に次の行に折り返されます。",
        "padding込みで計算すると開き括弧が行末にきますが、次行に移っているのが確認できます。",
    );

    let (block_width, block_height) = (Pt(400.0), Pt(150.0));
    let layout = engine
        .layout(
            text,
            &LayoutOptions::new(block_width, Pt(14.0))
                .leading_ratio(1.6)
                .justify(true),
        )
        .expect("can lay out text");

    let without_padding = BlockAligner::new(&layout, block_width, block_height)
        .expect("box is valid")
        .alignment(HAlign::Center, VAlign::Top)
        .apply();
    let with_padding = BlockAligner::new(&layout, block_width, block_height)
        .expect("box is valid")
        .alignment(HAlign::Center, VAlign::Top)
        .padding(Pt(10.0))
        .apply();

    for (name, aligned) in [("no padding", &without_padding), ("padding 10", &with_padding)] {
        println!("{name}:");
        for line in aligned.lines() {
            println!(
                "  ({:>7.2}, {:>7.2}) {:>7.2} wide {:?}: {}",
                line.left().0,
                line.top().0,
                line.width().0,
                line.break_kind(),
                line.text()
            );
        }
    }

    // letter-sized page, boxes stacked from the top-left margin
    let (x, y) = (Pt(50.0), Pt(11.0 * 72.0 - 50.0));
    let mut renderer = ContentRenderer::new(engine.fonts()).colour(colours::BLACK);
    renderer
        .render(&without_padding, x, y)
        .expect("can render");
    renderer
        .render(&with_padding, x, y - block_height - Pt(20.0))
        .expect("can render");

    let content = renderer.finish();
    std::fs::write("padding.content", &content).expect("can write content stream");
    println!("wrote {} bytes of content stream to padding.content", content.len());
}
