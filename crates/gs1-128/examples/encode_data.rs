//! Simple encoder to inspect GS1-128 streams.

use gs1_128::{decode_stream, encode};

fn main() {
    let data = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(01)12345678901234(11)240315(10)LOT42".to_string());

    println!("Input: {}", data);

    let stream = encode(&data).expect("Failed to encode");
    println!("Encoded: {}", stream.escaped());
    println!("Bytes: {}", stream.len());

    if !stream.is_structured() {
        println!("\nFree-form data, passed through unchanged.");
        return;
    }

    let segments = decode_stream(stream.as_str()).expect("Failed to split stream");
    println!("\n=== Segments ({}) ===", segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let kind = match segment.fixed_length {
            Some(len) => format!("fixed {}", len),
            None => "variable".to_string(),
        };
        println!(
            "[{}] ({}) {} [{}{}]",
            i,
            segment.ai,
            segment.value,
            kind,
            if segment.separated { ", FNC1" } else { "" }
        );
    }
    println!("FNC1 count: {}", stream.fnc1_count());
}
