use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tablut::adapter::{decode_state, read_frame, write_frame, MovePayload, StateMessage, WireCell};
use tablut::core::BoardConfig;
use tablut::types::{Coord, Move};

/// Classic opening position: king on the throne, defenders in a cross,
/// attackers in the four camps.
fn initial_state(turn: &str) -> StateMessage {
    let mut board = [[WireCell::Empty; 9]; 9];
    board[4][4] = WireCell::King;
    for (row, col) in [
        (2, 4),
        (3, 4),
        (5, 4),
        (6, 4),
        (4, 2),
        (4, 3),
        (4, 5),
        (4, 6),
    ] {
        board[row][col] = WireCell::White;
    }
    for (row, col) in [
        (0, 3),
        (0, 4),
        (0, 5),
        (1, 4),
        (8, 3),
        (8, 4),
        (8, 5),
        (7, 4),
        (3, 0),
        (4, 0),
        (5, 0),
        (4, 1),
        (3, 8),
        (4, 8),
        (5, 8),
        (4, 7),
    ] {
        board[row][col] = WireCell::Black;
    }
    StateMessage {
        board,
        turn: turn.to_string(),
    }
}

fn bench_decode_state(c: &mut Criterion) {
    let payload = serde_json::to_vec(&initial_state("WHITE")).unwrap();
    let config = BoardConfig::default();

    c.bench_function("decode_state_initial_board", |b| {
        b.iter(|| decode_state(black_box(&payload), &config).unwrap())
    });
}

fn bench_read_frame(c: &mut Criterion) {
    let payload = serde_json::to_vec(&initial_state("WHITE")).unwrap();
    let mut framed = vec![0u8; 8];
    framed.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    framed.extend_from_slice(&payload);

    c.bench_function("read_frame_with_padding", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(framed.as_slice()));
            read_frame(&mut cursor).unwrap()
        })
    });
}

fn bench_encode_move(c: &mut Criterion) {
    let mv = Move::new(
        Coord::new(2, 4).unwrap(),
        Coord::new(2, 7).unwrap(),
    );

    c.bench_function("encode_and_frame_move", |b| {
        b.iter(|| {
            let payload = serde_json::to_vec(&MovePayload::new(black_box(mv))).unwrap();
            let mut out = Vec::with_capacity(payload.len() + 4);
            write_frame(&mut out, &payload).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_decode_state, bench_read_frame, bench_encode_move);
criterion_main!(benches);
