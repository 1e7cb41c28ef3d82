use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use tablut::adapter::{DirectClient, Session, StateMessage, WireCell};
use tablut::core::BoardConfig;
use tablut::engine::{EngineConfig, RandomEngine};
use tablut::types::{Color, Coord};

fn board_with(cells: &[(usize, usize, WireCell)]) -> [[WireCell; 9]; 9] {
    let mut board = [[WireCell::Empty; 9]; 9];
    board[4][4] = WireCell::Throne;
    for &(row, col, cell) in cells {
        board[row][col] = cell;
    }
    board
}

fn state_payload(cells: &[(usize, usize, WireCell)], turn: &str) -> Vec<u8> {
    serde_json::to_vec(&StateMessage {
        board: board_with(cells),
        turn: turn.to_string(),
    })
    .unwrap()
}

/// Server-side frame: optional keepalive padding, 2-byte big-endian length,
/// then the payload.
async fn send_state(stream: &mut TcpStream, padding: usize, payload: &[u8]) {
    assert!(
        payload.len() >= 256,
        "state frames must keep the length high byte nonzero"
    );
    let mut bytes = vec![0u8; padding];
    bytes.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    bytes.extend_from_slice(payload);
    stream.write_all(&bytes).await.unwrap();
    stream.flush().await.unwrap();
}

/// Client-side frame: 4-byte big-endian length, then the payload.
async fn read_client_frame(stream: &mut TcpStream) -> Vec<u8> {
    let mut len = [0u8; 4];
    stream.read_exact(&mut len).await.unwrap();
    let mut payload = vec![0u8; u32::from_be_bytes(len) as usize];
    stream.read_exact(&mut payload).await.unwrap();
    payload
}

fn seeded_engine() -> RandomEngine {
    RandomEngine::new(EngineConfig {
        seed: Some(1),
        ..EngineConfig::default()
    })
}

#[tokio::test]
async fn plays_a_full_session_against_a_mock_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (ready_tx, ready_rx) = oneshot::channel();

    let server = tokio::spawn(async move {
        ready_tx.send(()).unwrap();
        let (mut stream, _) = listener.accept().await.unwrap();

        let name = read_client_frame(&mut stream).await;
        assert_eq!(name, b"e2e-white");

        let pieces = [(4, 4, WireCell::King), (2, 4, WireCell::White)];
        // Opponent's turn first: the client must not answer.
        send_state(&mut stream, 5, &state_payload(&pieces, "BLACK")).await;
        // Our turn: the client must answer with exactly one move frame.
        send_state(&mut stream, 0, &state_payload(&pieces, "WHITE")).await;

        let move_frame = read_client_frame(&mut stream).await;
        let mv: serde_json::Value = serde_json::from_slice(&move_frame).unwrap();
        let from = mv["from"].as_str().unwrap().to_string();
        let to = mv["to"].as_str().unwrap().to_string();

        send_state(&mut stream, 2, &state_payload(&[], "WHITEWIN")).await;
        (from, to)
    });

    tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .unwrap();

    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        tokio::task::spawn_blocking(move || {
            let client = DirectClient::connect(
                "127.0.0.1",
                addr.port(),
                Color::White,
                BoardConfig::default(),
            )
            .expect("connect failed");
            let mut session = Session::new(
                client,
                seeded_engine(),
                Color::White,
                Duration::from_secs(50),
            );
            session.run("e2e-white").expect("session failed")
        }),
    )
    .await
    .expect("client timed out")
    .unwrap();

    // The turn label is surfaced verbatim, lower-cased.
    assert_eq!(outcome.result, "whitewin");

    let (from, to) = tokio::time::timeout(Duration::from_secs(2), server)
        .await
        .expect("server task timed out")
        .unwrap();
    let from = Coord::from_algebraic(&from).expect("move origin is algebraic");
    let to = Coord::from_algebraic(&to).expect("move target is algebraic");
    assert!(from.row == to.row || from.col == to.col, "rook-like move");
}

#[tokio::test]
async fn opponent_turns_produce_no_outgoing_frames() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (ready_tx, ready_rx) = oneshot::channel();

    let server = tokio::spawn(async move {
        ready_tx.send(()).unwrap();
        let (mut stream, _) = listener.accept().await.unwrap();

        let name = read_client_frame(&mut stream).await;
        assert_eq!(name, b"e2e-white");

        // Never the client's turn, then the game ends.
        send_state(&mut stream, 1, &state_payload(&[], "BLACK")).await;
        send_state(&mut stream, 0, &state_payload(&[], "BLACK")).await;
        send_state(&mut stream, 3, &state_payload(&[], "DRAW")).await;

        // The client should close without sending anything further.
        let mut buf = [0u8; 1];
        let read = tokio::time::timeout(Duration::from_secs(5), stream.read(&mut buf))
            .await
            .expect("client did not close")
            .unwrap();
        assert_eq!(read, 0, "client wrote after the game ended");
    });

    tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .unwrap();

    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        tokio::task::spawn_blocking(move || {
            let client = DirectClient::connect(
                "127.0.0.1",
                addr.port(),
                Color::White,
                BoardConfig::default(),
            )
            .expect("connect failed");
            let mut session = Session::new(
                client,
                seeded_engine(),
                Color::White,
                Duration::from_secs(50),
            );
            session.run("e2e-white").expect("session failed")
        }),
    )
    .await
    .expect("client timed out")
    .unwrap();

    assert_eq!(outcome.result, "draw");

    tokio::time::timeout(Duration::from_secs(2), server)
        .await
        .expect("server task timed out")
        .unwrap();
}

#[tokio::test]
async fn connection_lost_mid_frame_fails_the_read_phase() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (ready_tx, ready_rx) = oneshot::channel();

    let server = tokio::spawn(async move {
        ready_tx.send(()).unwrap();
        let (mut stream, _) = listener.accept().await.unwrap();

        let _name = read_client_frame(&mut stream).await;

        // Claim a 1000-byte payload but deliver only a fragment, then
        // disappear.
        stream.write_all(&1000u16.to_be_bytes()).await.unwrap();
        stream.write_all(&[b'x'; 100]).await.unwrap();
        stream.flush().await.unwrap();
        drop(stream);
    });

    tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .unwrap();

    let err = tokio::time::timeout(
        Duration::from_secs(5),
        tokio::task::spawn_blocking(move || {
            let client = DirectClient::connect(
                "127.0.0.1",
                addr.port(),
                Color::White,
                BoardConfig::default(),
            )
            .expect("connect failed");
            let mut session = Session::new(
                client,
                seeded_engine(),
                Color::White,
                Duration::from_secs(50),
            );
            session.run("e2e-white").unwrap_err()
        }),
    )
    .await
    .expect("client timed out")
    .unwrap();

    let chain = format!("{:#}", err);
    assert!(chain.contains("read"), "unexpected error chain: {chain}");
    assert!(chain.contains("connection closed"), "unexpected error chain: {chain}");

    tokio::time::timeout(Duration::from_secs(2), server)
        .await
        .expect("server task timed out")
        .unwrap();
}
