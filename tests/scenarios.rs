use rustfp::{Iterator, Some, collect, filter, find, find_map, fold, for_each, iter, map, range};

fn int_vec() -> Vec<i32> {
    vec![0, 1, 2, 3, 4, 5]
}

#[test]
fn collect_range() {
    let int_vec = int_vec();
    let dup_vec = range(0, int_vec.len() as i32) | collect::<Vec<i32>>();
    assert_eq!(int_vec, dup_vec);
}

#[test]
fn collect_map_then_fold_sum() {
    const ADDITIONAL: f64 = 0.5;
    let int_vec = int_vec();
    let dup_vec = range(0, int_vec.len() as i32) | map(|v: i32| v as f64 + ADDITIONAL) | collect::<Vec<f64>>();
    let fold_sum = iter(&dup_vec) | fold(0.0, |acc: f64, v: &f64| acc + v);
    let expected: f64 = int_vec.iter().map(|v| *v as f64 + ADDITIONAL).sum();
    assert_eq!(expected, fold_sum);
    assert_eq!(15.0 + 0.5 * 6.0, fold_sum);
}

#[test]
fn filter_odd_then_for_each() {
    let int_vec = int_vec();
    let mut sum = 0;
    (iter(&int_vec) | filter(|v: &&i32| **v % 2 == 1)).pipe(for_each(|v: &i32| sum += v));
    assert_eq!(9, sum);
}

#[test]
fn filter_odd_then_for_each_with_operator() {
    let int_vec = int_vec();
    let mut odds = Vec::new();
    let () = iter(&int_vec) | filter(|v: &&i32| **v % 2 == 1) | for_each(|v: &i32| odds.push(*v));
    assert_eq!(vec![1, 3, 5], odds);
}

#[test]
fn filter_odd_then_fold() {
    let int_vec = int_vec();
    assert_eq!(9, iter(&int_vec) | filter(|v: &&i32| **v % 2 == 1) | fold(0, |acc: i32, v: &i32| acc + v));
}

#[test]
fn fold_with_init() {
    let int_vec = int_vec();
    assert_eq!(25, iter(&int_vec) | fold(10, |acc: i32, v: &i32| acc + v));
}

#[test]
fn find_some_and_none() {
    let int_vec = int_vec();
    let find_some = iter(&int_vec) | find(|v: &&i32| **v == 5);
    assert!(find_some.is_some());
    assert_eq!(&5, find_some.get_unchecked());

    let find_none = iter(&int_vec) | find(|v: &&i32| **v == 6);
    assert!(find_none.is_none());
}

#[test]
fn find_map_some_and_none() {
    let mapper = |value: i32| value as f64 + 0.5;
    let int_vec = int_vec();

    let find_some = iter(&int_vec) | find_map(|v: &i32| if *v == 4 { Some(mapper(*v)) } else { rustfp::None });
    assert_eq!(mapper(4), find_some.get_unchecked());

    let find_none = iter(&int_vec) | find_map(|v: &i32| if *v == -1 { Some(*v) } else { rustfp::None });
    assert!(find_none.is_none());
}

#[test]
fn map_then_for_each() {
    let int_vec = int_vec();
    let mut sum = 0.0;
    (iter(&int_vec) | map(|v: &i32| *v as f64 * 0.5)).pipe(for_each(|v: f64| sum += v));
    assert_eq!(15.0 * 0.5, sum);
}

#[test]
fn range_fold() {
    assert_eq!(20, range(0, 6) | fold(5, |acc: i32, v: i32| acc + v));
}

#[test]
fn filter_map_fold_to_string() {
    let eleven_div_str = range(1, 100)
        | filter(|v: &i32| v % 11 == 0)
        | map(|v: i32| v.to_string())
        | fold(String::new(), |acc: String, s: String| acc + &s + " ");
    assert_eq!("11 22 33 44 55 66 77 88 99 ", eleven_div_str);
}

#[test]
fn filter_map_find_float() {
    // .5在尾数中可以精确表示，可以直接比较浮点数
    let find_opt = range(1, 100)
        | filter(|v: &i32| v % 17 == 0)
        | map(|v: i32| v as f64 + 0.5)
        | find(|v: &f64| *v == 34.5);
    assert!(find_opt.is_some());
    assert_eq!(34.5, find_opt.get_unchecked());
}

#[test]
fn collect_mapped_range_then_sum() {
    const N: i64 = 1000;
    let halves = range(0, N) | map(|v: i64| v as f64 + 0.5) | collect::<Vec<f64>>();
    assert_eq!(N as usize, halves.len());
    let sum = iter(&halves) | fold(0.0, |acc: f64, v: &f64| acc + v);
    assert_eq!((N * (N - 1) / 2) as f64 + 0.5 * N as f64, sum);
}
