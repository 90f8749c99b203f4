//! Splitting long text into request-sized chunks
//!
//! The speech endpoint only accepts short inputs. Text is cut at sentence and
//! clause punctuation first, then at whitespace, and only as a last resort in
//! the middle of a word. Neighbouring pieces are packed together while they
//! fit.

/// Characters after which a chunk may end (when followed by whitespace)
const BOUNDARIES: &[char] = &[
    '.', '!', '?', ';', ':', ',', '\u{0964}', '\u{0965}', '\u{2026}', '\u{3002}',
];

/// Split `text` into chunks of at most `max_chars` characters
///
/// Whitespace between chunks is dropped and runs of whitespace inside a chunk
/// collapse to a single space. Returns no chunks for blank input.
#[must_use]
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut packer = Packer::new(max_chars);

    for segment in segments(text) {
        if segment.chars().count() <= max_chars {
            packer.push(&segment);
            continue;
        }

        for word in segment.split_whitespace() {
            if word.chars().count() <= max_chars {
                packer.push(word);
            } else {
                for piece in hard_split(word, max_chars) {
                    packer.push(&piece);
                }
            }
        }
    }

    packer.finish()
}

/// Pieces of text ending at a boundary, with inner whitespace collapsed
fn segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        let at_boundary = BOUNDARIES.contains(&c)
            && chars.peek().is_none_or(|(_, next)| next.is_whitespace());
        if at_boundary {
            let end = index + c.len_utf8();
            push_segment(&mut segments, &text[start..end]);
            start = end;
        }
    }
    push_segment(&mut segments, &text[start..]);

    segments
}

fn push_segment(segments: &mut Vec<String>, raw: &str) {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        segments.push(collapsed);
    }
}

fn hard_split(word: &str, max_chars: usize) -> Vec<String> {
    word.chars()
        .collect::<Vec<_>>()
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

struct Packer {
    max_chars: usize,
    chunks: Vec<String>,
    current: String,
    current_chars: usize,
}

impl Packer {
    const fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            chunks: Vec::new(),
            current: String::new(),
            current_chars: 0,
        }
    }

    fn push(&mut self, piece: &str) {
        let piece_chars = piece.chars().count();
        if self.current_chars > 0 && self.current_chars + 1 + piece_chars > self.max_chars {
            self.flush();
        }

        if self.current_chars > 0 {
            self.current.push(' ');
            self.current_chars += 1;
        }
        self.current.push_str(piece);
        self.current_chars += piece_chars;
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.chunks.push(std::mem::take(&mut self.current));
        }
        self.current_chars = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}
