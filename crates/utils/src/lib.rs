use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                            abcdefghijklmnopqrstuvwxyz\
                            0123456789";

/// Length of the identifiers GoHighLevel assigns to its records
pub const REMOTE_ID_LEN: usize = 20;

/// Creates an alphanumeric identifier shaped like the ones
/// the remote calendar backends hand out, e.g. `QwJxUVksqilzJUDZf7Ct`.
pub fn create_random_id(id_len: usize) -> String {
    let mut rng = rand::thread_rng();

    (0..id_len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

pub fn create_remote_id() -> String {
    create_random_id(REMOTE_ID_LEN)
}
