use classic_crypto::cipher::{
    AffineCipher, HillCipher, SimpleSubstitution, TextCipher, ToyRsa, VernamCipher,
    VigenereCipher,
};
use classic_crypto::preset::alphabets::{LATIN_LOWERCASE, LATIN_WITH_SPACE};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const MESSAGE: &str = "Heh safasdkjfhkjas fha sdf asda";

fn round_trip(cipher: &dyn TextCipher, message: &str) -> String {
    let encrypted = cipher.encrypt(message).expect("encrypt");
    cipher.decrypt(&encrypted).expect("decrypt")
}

fn bench_happy_flow(c: &mut Criterion) {
    let affine = AffineCipher::try_with(LATIN_WITH_SPACE.clone(), 5, 8).expect("affine key");
    let vigenere = VigenereCipher::try_with(LATIN_LOWERCASE.clone(), "rus").expect("keyword");
    let substitution =
        SimpleSubstitution::try_with("qwertyuiopasdfghjklzxcvbnm").expect("permutation");
    let hill = HillCipher::try_with(vec![vec![3, 3], vec![2, 5]]).expect("matrix");
    let vernam = VernamCipher::try_with("secret").expect("pad");

    let ciphers: [(&str, &dyn TextCipher); 5] = [
        ("affine", &affine),
        ("vigenere", &vigenere),
        ("substitution", &substitution),
        ("hill", &hill),
        ("vernam", &vernam),
    ];

    let mut group = c.benchmark_group("happy_flow");
    for (name, cipher) in ciphers {
        group.bench_function(name, |b| {
            b.iter(|| black_box(round_trip(cipher, black_box(MESSAGE))))
        });
    }

    let rsa = ToyRsa::try_with(3557, 2579, 3).expect("rsa key");
    group.bench_function("rsa", |b| {
        b.iter(|| {
            let cipher = rsa.encrypt_number(black_box(111111)).expect("encrypt");
            black_box(rsa.decrypt_number(cipher).expect("decrypt"))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
