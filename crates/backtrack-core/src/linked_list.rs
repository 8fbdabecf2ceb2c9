//! Singly linked digit lists and their addition.

/// A node in a singly linked list of decimal digits, least significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    /// Create a node with no successor.
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Build a list from digits given least significant first.
    ///
    /// An empty slice gives `None` (the empty list).
    pub fn from_digits(digits: &[i32]) -> Option<Box<ListNode>> {
        let mut head = None;
        for &digit in digits.iter().rev() {
            head = Some(Box::new(ListNode {
                val: digit,
                next: head,
            }));
        }
        head
    }

    /// Collect a list back into digits, least significant first.
    pub fn to_digits(list: &Option<Box<ListNode>>) -> Vec<i32> {
        let mut digits = Vec::new();
        let mut node = list.as_deref();
        while let Some(n) = node {
            digits.push(n.val);
            node = n.next.as_deref();
        }
        digits
    }
}

/// Add two numbers stored as digit lists, least significant digit first.
///
/// The result list carries the full sum, including a final carry digit when
/// the sum grows longer than both inputs.
pub fn add_two_numbers(
    a: Option<Box<ListNode>>,
    b: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    let mut head = None;
    let mut tail = &mut head;
    let mut a = a.as_deref();
    let mut b = b.as_deref();
    let mut carry = 0;

    while a.is_some() || b.is_some() || carry != 0 {
        let mut sum = carry;
        if let Some(node) = a {
            sum += node.val;
            a = node.next.as_deref();
        }
        if let Some(node) = b {
            sum += node.val;
            b = node.next.as_deref();
        }
        carry = sum / 10;
        let node = tail.insert(Box::new(ListNode::new(sum % 10)));
        tail = &mut node.next;
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_addition() {
        // 342 + 465 = 807, stored least significant first.
        let a = ListNode::from_digits(&[2, 4, 3]);
        let b = ListNode::from_digits(&[5, 6, 4]);
        let sum = add_two_numbers(a, b);
        assert_eq!(ListNode::to_digits(&sum), vec![7, 0, 8]);
    }

    #[test]
    fn test_carry_ripples_past_both_inputs() {
        let a = ListNode::from_digits(&[9, 9]);
        let b = ListNode::from_digits(&[1]);
        let sum = add_two_numbers(a, b);
        assert_eq!(ListNode::to_digits(&sum), vec![0, 0, 1]);
    }

    #[test]
    fn test_uneven_lengths() {
        let a = ListNode::from_digits(&[1, 8]);
        let b = ListNode::from_digits(&[0]);
        let sum = add_two_numbers(a, b);
        assert_eq!(ListNode::to_digits(&sum), vec![1, 8]);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(add_two_numbers(None, None), None);
        let a = ListNode::from_digits(&[4, 2]);
        let sum = add_two_numbers(a, None);
        assert_eq!(ListNode::to_digits(&sum), vec![4, 2]);
    }

    #[test]
    fn test_digit_round_trip() {
        let list = ListNode::from_digits(&[3, 1, 4, 1, 5]);
        assert_eq!(ListNode::to_digits(&list), vec![3, 1, 4, 1, 5]);
    }
}
