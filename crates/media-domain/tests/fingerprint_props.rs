use media_domain::{MediaResource, Node};
use proptest::prelude::*;

fn arb_resource() -> impl Strategy<Value = MediaResource> {
    let data = proptest::option::of(proptest::collection::vec(any::<u8>(), 0..32));
    let text = proptest::option::of(".{0,16}");
    let path = proptest::option::of("[a-z/._-]{0,16}");
    let mimetype = proptest::option::of("[a-z]{1,8}/[a-z0-9.+-]{1,8}");
    (data, text, path, mimetype).prop_map(|(data, text, path, mimetype)| MediaResource { data,
                                                                                         text,
                                                                                         path: path.map(Into::into),
                                                                                         mimetype,
                                                                                         ..MediaResource::default() })
}

proptest! {
    #[test]
    fn resource_digest_is_lowercase_hex_64(r in arb_resource()) {
        let h = r.hash().unwrap();
        prop_assert_eq!(h.len(), 64);
        prop_assert!(h.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn resource_digest_is_deterministic(r in arb_resource()) {
        let copy = r.clone();
        prop_assert_eq!(r.hash().unwrap(), copy.hash().unwrap());
    }

    #[test]
    fn setting_unset_text_to_empty_changes_digest(r in arb_resource()) {
        prop_assume!(r.text.is_none());
        let with_empty = r.clone().with_text("");
        prop_assert_ne!(r.hash().unwrap(), with_empty.hash().unwrap());
    }

    #[test]
    fn node_digest_is_deterministic(text in proptest::option::of(arb_resource()), image in proptest::option::of(arb_resource())) {
        let a = Node { text_resource: text.clone(), image_resource: image.clone(), ..Node::new() };
        let b = Node { text_resource: text, image_resource: image, ..Node::new() };
        prop_assert_eq!(a.hash().unwrap(), b.hash().unwrap());
    }
}
