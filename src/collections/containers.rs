//! Standard collections: sequences, ordered and hashed maps and sets,
//! stacks, queues and heaps.
//!
//! Run with: cargo run --bin stl_containers

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::io::{self, Write};

use crate::console::{banner, spaced, topic, yes_no};

/// Pop everything off a max-heap, largest first.
pub fn drain_max_heap(items: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut heap: BinaryHeap<i32> = items.into_iter().collect();
    let mut order = Vec::with_capacity(heap.len());
    while let Some(top) = heap.pop() {
        order.push(top);
    }
    order
}

/// Pop everything off a min-heap built with [`Reverse`], smallest first.
pub fn drain_min_heap(items: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut heap: BinaryHeap<Reverse<i32>> = items.into_iter().map(Reverse).collect();
    let mut order = Vec::with_capacity(heap.len());
    while let Some(Reverse(top)) = heap.pop() {
        order.push(top);
    }
    order
}

/// Last-in first-out order of `items` pushed onto a `Vec` used as a stack.
pub fn stack_order<T>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut stack: Vec<T> = items.into_iter().collect();
    let mut popped = Vec::with_capacity(stack.len());
    while let Some(top) = stack.pop() {
        popped.push(top);
    }
    popped
}

fn vector(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Vec")?;
    let mut numbers = vec![1, 2, 3, 4, 5];
    let words = vec!["hello", "world", "rust"];
    numbers.push(6);
    numbers.insert(2, 10);

    writeln!(out, "  First element: {}", numbers[0])?;
    if let Some(last) = numbers.last() {
        writeln!(out, "  Last element: {last}")?;
    }
    writeln!(out, "  Size: {}", numbers.len())?;
    writeln!(out, "  All elements: {}", spaced(&numbers))?;
    writeln!(out, "  Checked access get(42): {:?}", numbers.get(42))?;
    writeln!(out, "  Words: {}", words.join(" "))?;
    writeln!(out)
}

fn linked_list(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "LinkedList")?;
    let mut list: LinkedList<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    list.push_front(0);
    list.push_back(6);

    // Insert after the first element by splitting and re-joining.
    let mut tail = list.split_off(1);
    list.push_back(10);
    list.append(&mut tail);
    writeln!(out, "  List elements: {}", spaced(&list))?;

    let mut kept: LinkedList<i32> = list.into_iter().filter(|&n| n != 3).collect();
    kept.pop_front();
    writeln!(out, "  After removal: {}", spaced(&kept))?;
    writeln!(out)
}

fn deque(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "VecDeque")?;
    let mut deque: VecDeque<i32> = VecDeque::from([1, 2, 3]);
    deque.push_front(0);
    deque.push_back(4);
    writeln!(out, "  Deque elements: {}", spaced(&deque))?;
    if let (Some(front), Some(back)) = (deque.front(), deque.back()) {
        writeln!(out, "  Front: {front}")?;
        writeln!(out, "  Back: {back}")?;
    }
    writeln!(out)
}

fn ordered_set(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "BTreeSet")?;
    let mut set: BTreeSet<i32> = [5, 2, 8, 1, 9].into_iter().collect();
    set.insert(3);
    let inserted_again = set.insert(5);
    writeln!(out, "  Set elements (sorted): {}", spaced(&set))?;
    writeln!(out, "  Inserting 5 again added it: {}", yes_no(inserted_again))?;
    writeln!(out, "  Contains 5: {}", yes_no(set.contains(&5)))?;
    writeln!(out, "  Contains 10: {}", yes_no(set.contains(&10)))?;
    set.remove(&5);
    writeln!(out, "  After removing 5: {}", spaced(&set))?;
    writeln!(out)
}

fn ordered_map(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "BTreeMap")?;
    let mut ages: BTreeMap<&str, u32> = BTreeMap::new();
    ages.insert("Alice", 25);
    ages.insert("Bob", 30);
    ages.insert("Charlie", 35);
    ages.entry("David").or_insert(28);

    writeln!(out, "  Alice's age: {}", ages["Alice"])?;
    if let Some(age) = ages.get("Bob") {
        writeln!(out, "  Bob's age: {age}")?;
    }
    writeln!(out, "  All ages:")?;
    for (name, age) in &ages {
        writeln!(out, "    {name}: {age}")?;
    }
    match ages.get("Eve") {
        Some(age) => writeln!(out, "  Eve's age: {age}")?,
        None => writeln!(out, "  Eve not found in map")?,
    }
    writeln!(out)
}

fn hashed(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Hashed containers")?;
    let mut fruits: HashSet<&str> = ["apple", "banana", "orange"].into_iter().collect();
    fruits.insert("grape");

    // Hash iteration order is unspecified; sort for stable output.
    let mut listed: Vec<_> = fruits.iter().copied().collect();
    listed.sort_unstable();
    writeln!(out, "  HashSet fruits ({}): {}", fruits.len(), spaced(&listed))?;

    let mut prices: HashMap<&str, f64> = HashMap::new();
    prices.insert("apple", 1.50);
    prices.insert("banana", 0.80);
    prices.insert("orange", 2.00);

    let mut entries: Vec<_> = prices.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    writeln!(out, "  HashMap prices:")?;
    for (fruit, price) in entries {
        writeln!(out, "    {fruit}: ${price:.2}")?;
    }
    writeln!(out)
}

fn stack(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Stack (Vec)")?;
    let stack = vec![10, 20, 30];
    writeln!(out, "  Stack operations:")?;
    if let Some(top) = stack.last() {
        writeln!(out, "    Top element: {top}")?;
    }
    writeln!(out, "    Stack size: {}", stack.len())?;
    for top in stack_order(stack) {
        writeln!(out, "    Popping: {top}")?;
    }
    writeln!(out)
}

fn queue(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Queue (VecDeque)")?;
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back("First");
    queue.push_back("Second");
    queue.push_back("Third");

    writeln!(out, "  Queue operations:")?;
    if let (Some(front), Some(back)) = (queue.front(), queue.back()) {
        writeln!(out, "    Front element: {front}")?;
        writeln!(out, "    Back element: {back}")?;
    }
    while let Some(item) = queue.pop_front() {
        writeln!(out, "    Processing: {item}")?;
    }
    writeln!(out)
}

fn priority_queue(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "BinaryHeap")?;
    writeln!(out, "  Max heap:")?;
    for value in drain_max_heap([30, 10, 50, 20]) {
        writeln!(out, "    Highest priority: {value}")?;
    }
    writeln!(out, "  Min heap (Reverse):")?;
    for value in drain_min_heap([30, 10, 50, 20]) {
        writeln!(out, "    Lowest priority: {value}")?;
    }
    writeln!(out)
}

fn array(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Array")?;
    let values: [i32; 5] = [1, 2, 3, 4, 5];
    writeln!(out, "  Array elements: {}", spaced(values))?;
    writeln!(out, "  Array size: {}", values.len())?;
    if let (Some(first), Some(last)) = (values.first(), values.last()) {
        writeln!(out, "  First element: {first}")?;
        writeln!(out, "  Last element: {last}")?;
    }
    writeln!(out, "  Element at index 2: {}", values[2])?;
    writeln!(out)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Standard Containers")?;
    vector(out)?;
    linked_list(out)?;
    deque(out)?;
    ordered_set(out)?;
    ordered_map(out)?;
    hashed(out)?;
    stack(out)?;
    queue(out)?;
    priority_queue(out)?;
    array(out)?;
    banner(out, "End of Containers Example")
}
