//! # Single tanh neuron
//!
//! `o = tanh(x1*w1 + x2*w2 + b)` built with the [`Value`] operators, then
//! differentiated. The bias is chosen so that `o = 1/sqrt(2)`.
//!
//! Expected gradients: x1 -1.5, w1 1.0, x2 0.5, w2 0.0.

use microdiff_core::{shared_graph, Value};

fn main() {
    let _ = env_logger::builder().is_test(false).try_init();

    let graph = shared_graph::<f64>();
    let x1 = Value::leaf(&graph, 2.0).with_label("x1");
    let x2 = Value::leaf(&graph, 0.0).with_label("x2");
    let w1 = Value::leaf(&graph, -3.0).with_label("w1");
    let w2 = Value::leaf(&graph, 1.0).with_label("w2");
    let b = Value::leaf(&graph, 6.881_373_587_019_543_2).with_label("b");

    let n = (&x1 * &w1 + &x2 * &w2 + &b).with_label("n");
    let o = n.tanh().with_label("o");
    o.backward();

    println!("o  = {}", o);
    println!("---");
    for v in [&x1, &w1, &x2, &w2] {
        println!("{:<2} {:.6}", v.label().unwrap_or_default(), v.grad());
    }
    println!("graph has {} nodes", graph.borrow().len());
}
