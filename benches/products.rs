use clifford_basis::algebra::basis::basis_blade_ids_sorted_by_grade;
use clifford_basis::algebra::sign::{compute_is_negative_egp, is_negative_egp};
use clifford_basis::{gbt_product, product, Euclidean, Multivector, ProductKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_main! { products }
criterion_group! { products, signs, full_products, sparse_products }

fn full(dim: u32) -> Multivector {
    Multivector::from_terms(basis_blade_ids_sorted_by_grade(dim).map(|id| (id, 1.0 + id as f64)))
}

fn signs(crit: &mut Criterion) {
    crit.bench_function("egp_sign_lookup_6d", |b| {
        b.iter(|| {
            for id1 in 0..64 {
                for id2 in 0..64 {
                    black_box(is_negative_egp(black_box(id1), black_box(id2)));
                }
            }
        })
    });

    crit.bench_function("egp_sign_compute_6d", |b| {
        b.iter(|| {
            for id1 in 0..64 {
                for id2 in 0..64 {
                    black_box(compute_is_negative_egp(black_box(id1), black_box(id2)));
                }
            }
        })
    });
}

fn full_products(crit: &mut Criterion) {
    let a = full(6);
    let b = full(6);

    crit.bench_function("gp_full_6d_dispatch", |bench| {
        bench.iter(|| black_box(product(ProductKind::Gp, &Euclidean, &a, &b)))
    });

    crit.bench_function("gp_full_6d_gbt", |bench| {
        bench.iter(|| black_box(gbt_product(ProductKind::Gp, Euclidean, &a, &b)))
    });
}

fn sparse_products(crit: &mut Criterion) {
    let a = Multivector::from_terms([(0b1, 1.0), (0b1_0000_0000, 2.0), (0b1_0001_0001, 3.0)]);
    let b = full(9);

    crit.bench_function("lcp_sparse_9d_dispatch", |bench| {
        bench.iter(|| black_box(product(ProductKind::Lcp, &Euclidean, &a, &b)))
    });

    crit.bench_function("lcp_sparse_9d_gbt", |bench| {
        bench.iter(|| black_box(gbt_product(ProductKind::Lcp, Euclidean, &a, &b)))
    });
}
