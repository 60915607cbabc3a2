// Scrolling behaviour of the editor pane as the cursor reaches its edges

use terminote::buffer::Buffer;
use terminote::cursor::Cursor;
use terminote::viewport::Viewport;

fn type_str(cursor: &mut Cursor, buffer: &mut Buffer, text: &str, viewport: &Viewport) {
    for ch in text.chars() {
        if ch == '\n' {
            cursor.newline(buffer, viewport).unwrap();
        } else {
            cursor.insert_char(buffer, ch, viewport).unwrap();
        }
    }
}

#[test]
fn test_typing_past_right_edge_scrolls_sideways() {
    let viewport = Viewport::new(5, 10);
    let mut buffer = Buffer::new();
    let mut cursor = Cursor::new();
    type_str(&mut cursor, &mut buffer, "abcdefghijkl", &viewport);

    assert_eq!(cursor.x, 9);
    assert_eq!(cursor.left_col, 3);
    assert_eq!(cursor.absolute().col, 12);

    for _ in 0..9 {
        cursor.move_left(&buffer, &viewport).unwrap();
    }
    assert_eq!((cursor.x, cursor.left_col), (0, 3));
    cursor.move_left(&buffer, &viewport).unwrap();
    assert_eq!((cursor.x, cursor.left_col), (0, 2));
}

#[test]
fn test_join_onto_wide_line_scrolls_by_pane_width() {
    let viewport = Viewport::new(5, 10);
    let mut buffer = Buffer::new();
    let mut cursor = Cursor::new();
    type_str(&mut cursor, &mut buffer, "abcdefghijkl\nz", &viewport);
    assert_eq!((cursor.y, cursor.x, cursor.left_col), (1, 1, 0));

    cursor.move_left(&buffer, &viewport).unwrap();
    cursor.backspace(&mut buffer, &viewport).unwrap();

    assert_eq!(buffer.text(), "abcdefghijklz");
    assert_eq!((cursor.y, cursor.x, cursor.left_col), (0, 2, 10));
    assert_eq!(cursor.absolute().col, 12);
}

#[test]
fn test_newlines_past_bottom_scroll_down() {
    let viewport = Viewport::new(3, 10);
    let mut buffer = Buffer::new();
    let mut cursor = Cursor::new();
    type_str(&mut cursor, &mut buffer, "\n\n\n\n\n", &viewport);
    assert_eq!((cursor.y, cursor.top_row), (2, 3));
    assert_eq!(buffer.line_count(), 6);

    for _ in 0..3 {
        cursor.move_up(&buffer, &viewport).unwrap();
    }
    assert_eq!((cursor.y, cursor.top_row), (0, 2));
}

#[test]
fn test_right_arrow_wraps_to_next_line() {
    let viewport = Viewport::new(3, 10);
    let mut buffer = Buffer::from_text("ab\ncd").unwrap();
    let mut cursor = Cursor::new();
    for _ in 0..3 {
        cursor.move_right(&buffer, &viewport).unwrap();
    }
    assert_eq!(cursor.absolute().line, 1);
    assert_eq!(cursor.absolute().col, 0);

    // Stops at the end of the buffer
    for _ in 0..5 {
        cursor.move_right(&buffer, &viewport).unwrap();
    }
    assert_eq!(cursor.absolute().col, 2);

    cursor.backspace(&mut buffer, &viewport).unwrap();
    assert_eq!(buffer.text(), "ab\nc");
}
