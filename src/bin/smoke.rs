//! Thin command-line smoke driver for the deque. Integer arguments
//! are pushed alternately at the back and the front, one item is
//! popped from each end, and whatever remains is printed front to
//! back separated by spaces.

use linked_deque::Deque;
use std::env;
use std::process;

fn main() {
    let mut deque: Deque<i64> = Deque::new();

    for (i, arg) in env::args().skip(1).enumerate() {
        let n = match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("not an integer: {}", arg);
                process::exit(1);
            }
        };

        if i % 2 == 0 {
            deque.push_back(n);
        } else {
            deque.push_front(n);
        }
    }

    if let Ok(n) = deque.pop_front() {
        println!("popped front: {}", n);
    }
    if let Ok(n) = deque.pop_back() {
        println!("popped back: {}", n);
    }

    let items: Vec<String> = deque.iter().map(|n| n.to_string()).collect();
    println!("{}", items.join(" "));
}
