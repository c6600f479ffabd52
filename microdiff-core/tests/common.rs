use microdiff_core::ops::{
    add_op, add_scalar_op, div_op, exp_op, mul_op, neg_op, pow_op, sub_op, tanh_op,
};
use microdiff_core::{Graph, MicrodiffError, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds a random smooth expression over `leaves` and returns its root.
///
/// Operands are drawn from every node created so far, so the result shares
/// subexpressions freely. Factors, exponents and divisors are squashed through
/// `tanh` or kept `>= 1`, so magnitudes grow at most additively.
#[allow(dead_code)]
pub fn random_smooth_expression(
    graph: &mut Graph<f64>,
    leaves: &[NodeId],
    steps: usize,
    seed: u64,
) -> Result<NodeId, MicrodiffError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool: Vec<NodeId> = leaves.to_vec();

    for _ in 0..steps {
        let a = pool[rng.gen_range(0..pool.len())];
        let b = pool[rng.gen_range(0..pool.len())];
        let node = match rng.gen_range(0..8) {
            0 => add_op(graph, a, b),
            1 => {
                let t = tanh_op(graph, b);
                mul_op(graph, a, t)
            }
            2 => sub_op(graph, a, b),
            3 => neg_op(graph, a),
            4 => tanh_op(graph, a),
            5 => {
                let t = tanh_op(graph, a);
                exp_op(graph, t)
            }
            6 => {
                let sq = pow_op(graph, b, 2.0)?;
                let divisor = add_scalar_op(graph, sq, 1.0);
                div_op(graph, a, divisor)
            }
            _ => {
                let t = tanh_op(graph, a);
                pow_op(graph, t, 3.0)?
            }
        };
        pool.push(node);
    }

    Ok(*pool.last().unwrap_or(&leaves[0]))
}

/// Every ancestor of `root`, including `root`, found by a plain worklist search.
#[allow(dead_code)]
pub fn ancestors(graph: &Graph<f64>, root: NodeId) -> Vec<NodeId> {
    let mut seen = vec![false; graph.len()];
    let mut stack = vec![root];
    let mut found = Vec::new();
    while let Some(node) = stack.pop() {
        if seen[node.index()] {
            continue;
        }
        seen[node.index()] = true;
        found.push(node);
        stack.extend(graph.operands(node));
    }
    found.sort();
    found
}
