use crate::error::Error;
use crate::list::CircularList;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, u32),
    InsertFirst(u32),
    AppendLast(u32),
    Delete(usize),
    DeleteFirst,
    DeleteLast,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..16_usize, any::<u32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        1 => any::<u32>().prop_map(Op::InsertFirst),
        2 => any::<u32>().prop_map(Op::AppendLast),
        3 => (0..16_usize).prop_map(Op::Delete),
        1 => Just(Op::DeleteFirst),
        1 => Just(Op::DeleteLast),
    ]
}

/// Apply `op` to the list and to a `Vec` model following the same
/// acceptance rules, returning whether the list reported success.
fn apply(list: &mut CircularList<u32>, model: &mut Vec<u32>, op: &Op) -> bool {
    match *op {
        Op::Insert(i, x) => {
            let accepted = i == 0 || i < model.len();
            if accepted {
                model.insert(i, x);
            }
            let inserted = list.insert(i, x);
            assert_eq!(inserted, accepted);
            inserted
        }
        Op::InsertFirst(x) => {
            model.insert(0, x);
            list.insert_first(x)
        }
        Op::AppendLast(x) => {
            model.push(x);
            list.append_last(x)
        }
        Op::Delete(i) => {
            let accepted = i > 0 && i < model.len();
            if accepted {
                model.remove(i);
            }
            let deleted = list.delete(i);
            assert_eq!(deleted, accepted);
            deleted
        }
        Op::DeleteFirst => {
            list.delete_first();
            false
        }
        Op::DeleteLast => {
            let len = model.len();
            if len > 1 {
                model.pop();
            }
            list.delete_last();
            len > 1
        }
    }
}

proptest! {
    #[test]
    fn list_matches_vec_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = CircularList::new();
        let mut model = Vec::new();
        let mut inserted = 0_usize;
        let mut deleted = 0_usize;

        for op in &ops {
            let before = list.len();
            let succeeded = apply(&mut list, &mut model, op);
            match op {
                Op::Insert(..) | Op::InsertFirst(_) | Op::AppendLast(_) if succeeded => {
                    inserted += 1;
                    prop_assert_eq!(list.len(), before + 1);
                }
                Op::Delete(_) | Op::DeleteLast if succeeded => {
                    deleted += 1;
                    prop_assert_eq!(list.len(), before - 1);
                }
                _ => {
                    prop_assert_eq!(list.len(), before);
                }
            }
            list.assert_ring();
            prop_assert_eq!(list.len(), inserted - deleted);
            prop_assert_eq!(list.is_empty(), model.is_empty());
        }

        for (i, x) in model.iter().enumerate() {
            prop_assert_eq!(list.get_data(i), Ok(x));
        }
        prop_assert_eq!(
            list.get_data(model.len()),
            Err(Error::IndexOutOfRange { index: model.len(), len: model.len() })
        );
        prop_assert_eq!(list.get_first_data().ok(), model.first());
        prop_assert_eq!(list.get_last_data().ok(), model.last());
    }

    #[test]
    fn delete_first_element_is_rejected(values in prop::collection::vec(any::<u32>(), 0..32)) {
        let mut list = values.iter().copied().collect::<CircularList<_>>();
        prop_assert!(!list.delete(0));
        list.delete_first();
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.get_first_data().ok(), values.first());
    }

    #[test]
    fn insert_first_then_append_last(
        values in prop::collection::vec(any::<u32>(), 0..32),
        front in any::<u32>(),
        back in any::<u32>(),
    ) {
        let mut list = values.iter().copied().collect::<CircularList<_>>();

        prop_assert!(list.insert_first(front));
        prop_assert_eq!(list.get_first_data(), Ok(&front));
        prop_assert_eq!(list.len(), values.len() + 1);

        let prior_last = *list.get_last_data().unwrap();
        prop_assert!(list.append_last(back));
        prop_assert_eq!(list.get_last_data(), Ok(&back));
        prop_assert_eq!(list.get_data(list.len() - 2), Ok(&prior_last));
    }
}
