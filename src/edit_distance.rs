/// Minimum number of unit-cost insertions, deletions and substitutions that
/// turn `hyp` into `gold`.
///
/// Only two rows of the (|hyp|+1) x (|gold|+1) cost matrix are kept, and the
/// row runs over the shorter of the two sequences, so memory is
/// O(min(|hyp|, |gold|)). Unit costs make the distance symmetric, which is what
/// allows the swap.
pub fn edit_distance<T: PartialEq>(hyp: &[T], gold: &[T]) -> usize {
    let (outer, inner) = if hyp.len() >= gold.len() {
        (hyp, gold)
    } else {
        (gold, hyp)
    };

    if inner.is_empty() {
        return outer.len();
    }

    // The matrix looks like this:
    //     ""  s
    // "" [ 0  1 ]
    //  k [ 1  ? ]
    // `prev` holds row i-1 and `curr` is row i being filled. Row 0 is the
    // cost of inserting the first j tokens.
    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr: Vec<usize> = vec![0; inner.len() + 1];

    for (i, outer_tok) in outer.iter().enumerate() {
        // Column 0 is deleting the first i+1 tokens
        curr[0] = i + 1;
        for (j, inner_tok) in inner.iter().enumerate() {
            // prev[j] is the diagonal, prev[j + 1] is above, curr[j] is left
            curr[j + 1] = if outer_tok == inner_tok {
                prev[j]
            } else {
                let delete_cost = prev[j + 1];
                let insert_cost = curr[j];
                let substitution_cost = prev[j];
                1 + delete_cost.min(insert_cost).min(substitution_cost)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[inner.len()]
}
