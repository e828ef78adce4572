use crate::domain::ports::page_parser::{PageParser, PrizeRegion, ResultPage};
use scraper::{ElementRef, Html, Node};

const PRIZE_TAG: &str = "span";
const PRIZE_CLASS: &str = "text-premio";
const DETAIL_TAG: &str = "div";
const DETAIL_CLASS: &str = "text-premio-det";

const HIGHLIGHT_TAGS: [&str; 3] = ["div", "span", "p"];
const HIGHLIGHT_CLASS_WORDS: [&str; 4] = ["resultado", "premio", "numero", "loteria"];
const MAX_HIGHLIGHTS: usize = 5;

/// Parses the results page HTML of the lottery site.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlPageParser;

impl HtmlPageParser {
    pub fn new() -> Self {
        Self
    }
}

impl PageParser for HtmlPageParser {
    fn parse(&self, body: &str) -> ResultPage {
        let doc = Html::parse_document(body);
        let root = doc.root_element();

        let title = elements(root)
            .find(|e| e.value().name() == "title")
            .map(flatten_text);

        let prize = find_by_class(root, PRIZE_TAG, PRIZE_CLASS).map(|region| PrizeRegion {
            text: flatten_text(region),
            detail: find_by_class(region, DETAIL_TAG, DETAIL_CLASS).map(flatten_text),
        });

        let highlights = elements(root)
            .filter(|e| HIGHLIGHT_TAGS.contains(&e.value().name()))
            .filter(|e| {
                e.value().attr("class").is_some_and(|class| {
                    let class = class.to_lowercase();
                    HIGHLIGHT_CLASS_WORDS.iter().any(|w| class.contains(*w))
                })
            })
            .map(flatten_text)
            .filter(|text| !text.is_empty())
            .take(MAX_HIGHLIGHTS)
            .collect();

        ResultPage {
            title,
            prize,
            highlights,
        }
    }
}

fn elements(root: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    root.descendants().filter_map(ElementRef::wrap)
}

fn find_by_class<'a>(root: ElementRef<'a>, tag: &str, class: &str) -> Option<ElementRef<'a>> {
    elements(root)
        .skip(1)
        .find(|e| e.value().name() == tag && e.value().classes().any(|c| c == class))
}

/// Element text with `<br>` turned into spaces and whitespace collapsed.
fn flatten_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(e) if e.name() == "br" => raw.push(' '),
            _ => {}
        }
    }
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
