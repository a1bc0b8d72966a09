use rolodex_client::{visible_slice, SortColumn, SortOrder, TableState};
use rolodex_model::Contact;

fn contact(id: i64, first: &str, phone: &str) -> Contact {
    Contact {
        id,
        first_name: first.to_string(),
        last_name: "L".to_string(),
        email: format!("{first}@x.io"),
        phone_number: phone.to_string(),
        company: "C".to_string(),
        job_title: "J".to_string(),
    }
}

fn sample_rows() -> Vec<Contact> {
    vec![
        contact(1, "Carol", "30"),
        contact(2, "Alice", "4"),
        contact(3, "Bob", "1000000000"),
        contact(4, "Dave", "9111111111"),
        contact(5, "Erin", "222"),
        contact(6, "Frank", "55"),
        contact(7, "Grace", "7"),
    ]
}

#[test]
fn sorting_twice_with_the_same_controls_is_idempotent() {
    let rows = sample_rows();
    let once = visible_slice(&rows, SortOrder::Asc, SortColumn::FirstName, 0, 5);
    let twice = visible_slice(&once, SortOrder::Asc, SortColumn::FirstName, 0, 5);
    assert_eq!(once, twice);
}

#[test]
fn toggling_the_direction_twice_returns_to_the_original_order() {
    let rows = sample_rows();
    let mut state = TableState::default();
    state.set_page_size(25);
    let original = state.visible(&rows);

    state.request_sort(SortColumn::FirstName);
    let flipped = state.visible(&rows);
    assert_eq!(state.order, SortOrder::Desc);
    assert_ne!(original, flipped);

    state.request_sort(SortColumn::FirstName);
    assert_eq!(state.order, SortOrder::Asc);
    assert_eq!(state.visible(&rows), original);
}

#[test]
fn selecting_a_new_column_resets_to_ascending() {
    let mut state = TableState::default();
    state.request_sort(SortColumn::FirstName);
    assert_eq!(state.order, SortOrder::Desc);
    state.request_sort(SortColumn::Email);
    assert_eq!(state.order, SortOrder::Asc);
    assert_eq!(state.order_by, SortColumn::Email);
}

#[test]
fn phone_numbers_sort_as_strings_not_numbers() {
    let rows = sample_rows();
    let sorted = visible_slice(&rows, SortOrder::Asc, SortColumn::PhoneNumber, 0, 25);
    let phones: Vec<&str> = sorted.iter().map(|c| c.phone_number.as_str()).collect();
    // Lexicographic: "1000000000" < "222" < "30" < "4" even though the
    // numeric order differs.
    assert_eq!(phones, vec!["1000000000", "222", "30", "4", "55", "7", "9111111111"]);
}

#[test]
fn id_still_sorts_numerically() {
    let mut rows = sample_rows();
    rows.reverse();
    let sorted = visible_slice(&rows, SortOrder::Asc, SortColumn::Id, 0, 25);
    let ids: Vec<i64> = sorted.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn pagination_slices_the_sorted_list_and_clamps_the_tail() {
    let rows = sample_rows();
    let page0 = visible_slice(&rows, SortOrder::Asc, SortColumn::FirstName, 0, 5);
    assert_eq!(page0.len(), 5);
    assert_eq!(page0[0].first_name, "Alice");

    let page1 = visible_slice(&rows, SortOrder::Asc, SortColumn::FirstName, 1, 5);
    assert_eq!(page1.len(), 2);
    assert_eq!(page1[0].first_name, "Frank");

    let beyond = visible_slice(&rows, SortOrder::Asc, SortColumn::FirstName, 9, 5);
    assert!(beyond.is_empty());
}

#[test]
fn changing_the_page_size_resets_to_the_first_page() {
    let mut state = TableState::default();
    state.set_page(2);
    assert_eq!(state.page, 2);
    state.set_page_size(10);
    assert_eq!(state.page, 0);
    assert_eq!(state.page_size, 10);
}

#[test]
fn equal_sort_keys_keep_their_fetch_order() {
    let rows = vec![
        contact(10, "Same", "1"),
        contact(11, "Same", "2"),
        contact(12, "Same", "3"),
    ];
    let sorted = visible_slice(&rows, SortOrder::Asc, SortColumn::FirstName, 0, 25);
    let ids: Vec<i64> = sorted.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);

    let reversed = visible_slice(&rows, SortOrder::Desc, SortColumn::FirstName, 0, 25);
    let ids: Vec<i64> = reversed.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![10, 11, 12], "stable sort leaves ties untouched");
}
