use media_domain::{MediaResource, Node, NodeSlot};
use serde_json::json;

fn populated_node() -> Node {
    let mut node = Node::new();
    node.audio_resource = Some(MediaResource::new().with_data(b"test audio".to_vec()).with_mimetype("audio/aac"));
    node.image_resource = Some(MediaResource::new().with_data(b"test image".to_vec()).with_mimetype("image/png"));
    node.text_resource = Some(MediaResource::new().with_text("some text").with_mimetype("text/plain"));
    node.video_resource = Some(MediaResource::new().with_data(b"some video".to_vec()).with_mimetype("video/mpeg"));
    node
}

#[test]
fn populated_node_hash_is_consistent() {
    let h = populated_node().hash().unwrap();
    assert_eq!(h.len(), 64);
    assert_eq!(h, populated_node().hash().unwrap());
}

#[test]
fn empty_node_hash_is_stable() {
    let h = Node::new().hash().unwrap();
    assert_eq!(h.len(), 64);
    assert_eq!(h, Node::new().hash().unwrap());
}

#[test]
fn empty_node_hash_is_pinned() {
    assert_eq!(Node::new().hash().unwrap(), "3cf92eae7118cddfe226600eeaf0d9151d6191795d86d6a85f17e9a7c9b0a283");
    let doc = json!({
        "scheme": media_core::FINGERPRINT_SCHEME,
        "text_resource": null,
        "image_resource": null,
        "audio_resource": null,
        "video_resource": null,
    });
    assert_eq!(Node::new().hash().unwrap(), media_core::hash_value(&doc));
}

#[test]
fn unset_slot_differs_from_empty_resource_slot() {
    let unset = Node::new();
    let empty = Node::new().with_text_resource(MediaResource::new());
    assert_ne!(unset.hash().unwrap(), empty.hash().unwrap());
}

#[test]
fn same_resource_in_different_slots_differs() {
    let r = MediaResource::new().with_data(b"x".to_vec());
    let as_image = Node::new().with_image_resource(r.clone());
    let as_video = Node::new().with_video_resource(r);
    assert_ne!(as_image.hash().unwrap(), as_video.hash().unwrap());
}

#[test]
fn different_resources_different_hash() {
    let different = Node::new().with_text_resource(MediaResource::new().with_text("different text"));
    assert_ne!(populated_node().hash().unwrap(), different.hash().unwrap());
}

#[test]
fn changing_one_slot_changes_only_node_digest() {
    let base = populated_node();
    for slot in NodeSlot::ALL {
        let mut changed = base.clone();
        changed.set_slot(slot, Some(MediaResource::new().with_text("replacement")));
        assert_ne!(base.hash().unwrap(), changed.hash().unwrap(), "slot {:?}", slot);

        for other in NodeSlot::ALL.into_iter().filter(|s| *s != slot) {
            let before = base.slot(other).unwrap().hash().unwrap();
            let after = changed.slot(other).unwrap().hash().unwrap();
            assert_eq!(before, after);
        }
    }
}

#[test]
fn id_and_metadata_do_not_affect_hash() {
    let a = populated_node();
    let b = populated_node().with_metadata("source", json!("test"));
    assert_ne!(a.id, b.id);
    assert_eq!(a.hash().unwrap(), b.hash().unwrap());
}

#[test]
fn node_hash_composes_slot_digests() {
    let image = MediaResource::new().with_data(b"img".to_vec());
    let node = Node::new().with_image_resource(image.clone());
    let doc = json!({
        "scheme": media_core::FINGERPRINT_SCHEME,
        "text_resource": null,
        "image_resource": image.hash().unwrap(),
        "audio_resource": null,
        "video_resource": null,
    });
    assert_eq!(node.hash().unwrap(), media_core::hash_value(&doc));
}
