use classic_crypto::cipher::{HillCipher, TextCipher, VigenereCipher};
use classic_crypto::preset::alphabets::LATIN_LOWERCASE;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fake::Fake;
use fake::faker::lorem::en::Words;

fn make_string(len: usize) -> String {
    let mut s = String::with_capacity(len);
    while s.len() < len {
        let words: Vec<String> = Words(10..20).fake();
        if !s.is_empty() {
            s.push(' ');
        }
        s.push_str(&words.join(" "));
    }
    s.truncate(len);
    s
}

fn bench_sizes(c: &mut Criterion) {
    let vigenere = VigenereCipher::try_with(LATIN_LOWERCASE.clone(), "lemon").expect("keyword");
    let hill = HillCipher::try_with(vec![vec![3, 3], vec![2, 5]]).expect("matrix");

    let sizes: [(usize, &str); 3] = [(1_000, "1k"), (100_000, "100k"), (1_000_000, "1m")];

    let mut group = c.benchmark_group("Sizes Encrypt/Decrypt");

    for (len, label) in sizes {
        let data = make_string(len);

        for (name, cipher) in [
            ("vigenere", &vigenere as &dyn TextCipher),
            ("hill", &hill as &dyn TextCipher),
        ] {
            let ciphertext = cipher.encrypt(&data).expect("encrypt");

            group.bench_with_input(
                BenchmarkId::new(format!("{} encrypt", name), label),
                &data,
                |b, d| b.iter(|| cipher.encrypt(black_box(d)).expect("encrypt")),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{} decrypt", name), label),
                &ciphertext,
                |b, ctext| b.iter(|| cipher.decrypt(black_box(ctext)).expect("decrypt")),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sizes);
criterion_main!(benches);
