pub mod html_parser;
