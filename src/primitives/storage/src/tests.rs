use crate::*;

#[test]
fn memory_store_get_put_delete() {
    let mut store = MemoryStore::new();

    assert!(store.get("a").unwrap().is_none());

    store.put("a", b"one".to_vec()).unwrap();
    assert_eq!(store.get("a").unwrap(), Some(b"one".to_vec()));
    assert_eq!(store.len(), 1);

    store.put("a", b"two".to_vec()).unwrap();
    assert_eq!(store.get("a").unwrap(), Some(b"two".to_vec()));
    assert_eq!(store.len(), 1);

    store.delete("a").unwrap();
    assert!(store.get("a").unwrap().is_none());
    assert!(store.is_empty());

    // deleting an absent key is not a store-level fault
    store.delete("a").unwrap();
}

#[test]
fn memory_store_scan_is_lexical() {
    let mut store = MemoryStore::new();
    store.put("b", b"2".to_vec()).unwrap();
    store.put("a", b"1".to_vec()).unwrap();
    store.put("c", b"3".to_vec()).unwrap();

    let kvs: Vec<(String, Vec<u8>)> = store.scan_all().unwrap().collect();
    assert_eq!(
        kvs,
        vec![
            ("a".to_string(), b"1".to_vec()),
            ("b".to_string(), b"2".to_vec()),
            ("c".to_string(), b"3".to_vec()),
        ]
    );
}

#[test]
fn json_codec_round_trip() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Sample {
        name: String,
        count: u32,
    }

    let sample = Sample {
        name: "alpha".to_string(),
        count: 7,
    };

    let codec = JsonCodec;
    let bytes = codec.encode(&sample).unwrap();
    let back: Sample = codec.decode(&bytes).unwrap();
    assert_eq!(back, sample);
}

#[test]
fn json_codec_rejects_garbage() {
    let codec = JsonCodec;
    let res: Result<u32, StoreError> = codec.decode(b"not json");
    assert!(matches!(res, Err(StoreError::Codec(_))));
}
